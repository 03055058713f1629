pub mod portugal;
