//! Administrative geography of Portugal: the 18 districts and 2 autonomous
//! regions, all 308 municipalities, and the parishes of the main urban
//! municipalities only (Lisboa, Cascais, Oeiras, Porto, Funchal).
//!
//! Identifiers are dotted paths (`lisboa.cascais.alcabideche`), so equal names
//! under different parents stay distinct.

use crate::models::geography::{Location, LocationKind};

macro_rules! loc {
    ($kind:ident, $id:literal, $name:literal) => {
        Location {
            id: $id,
            name: $name,
            kind: LocationKind::$kind,
            children: &[],
        }
    };
    ($kind:ident, $id:literal, $name:literal, [$($child:expr),* $(,)?]) => {
        Location {
            id: $id,
            name: $name,
            kind: LocationKind::$kind,
            children: &[$($child),*],
        }
    };
}

/// Top level of the hierarchy, alphabetical, autonomous regions last.
pub static TOP_LEVEL: &[Location] = &[
    loc!(District, "aveiro", "Aveiro", [
        loc!(Municipality, "aveiro.agueda", "Águeda"),
        loc!(Municipality, "aveiro.albergaria-a-velha", "Albergaria-a-Velha"),
        loc!(Municipality, "aveiro.anadia", "Anadia"),
        loc!(Municipality, "aveiro.arouca", "Arouca"),
        loc!(Municipality, "aveiro.aveiro", "Aveiro"),
        loc!(Municipality, "aveiro.castelo-de-paiva", "Castelo de Paiva"),
        loc!(Municipality, "aveiro.espinho", "Espinho"),
        loc!(Municipality, "aveiro.estarreja", "Estarreja"),
        loc!(Municipality, "aveiro.ilhavo", "Ílhavo"),
        loc!(Municipality, "aveiro.mealhada", "Mealhada"),
        loc!(Municipality, "aveiro.murtosa", "Murtosa"),
        loc!(Municipality, "aveiro.oliveira-de-azemeis", "Oliveira de Azeméis"),
        loc!(Municipality, "aveiro.oliveira-do-bairro", "Oliveira do Bairro"),
        loc!(Municipality, "aveiro.ovar", "Ovar"),
        loc!(Municipality, "aveiro.santa-maria-da-feira", "Santa Maria da Feira"),
        loc!(Municipality, "aveiro.sao-joao-da-madeira", "São João da Madeira"),
        loc!(Municipality, "aveiro.sever-do-vouga", "Sever do Vouga"),
        loc!(Municipality, "aveiro.vagos", "Vagos"),
        loc!(Municipality, "aveiro.vale-de-cambra", "Vale de Cambra"),
    ]),
    loc!(District, "beja", "Beja", [
        loc!(Municipality, "beja.aljustrel", "Aljustrel"),
        loc!(Municipality, "beja.almodovar", "Almodôvar"),
        loc!(Municipality, "beja.alvito", "Alvito"),
        loc!(Municipality, "beja.barrancos", "Barrancos"),
        loc!(Municipality, "beja.beja", "Beja"),
        loc!(Municipality, "beja.castro-verde", "Castro Verde"),
        loc!(Municipality, "beja.cuba", "Cuba"),
        loc!(Municipality, "beja.ferreira-do-alentejo", "Ferreira do Alentejo"),
        loc!(Municipality, "beja.mertola", "Mértola"),
        loc!(Municipality, "beja.moura", "Moura"),
        loc!(Municipality, "beja.odemira", "Odemira"),
        loc!(Municipality, "beja.ourique", "Ourique"),
        loc!(Municipality, "beja.serpa", "Serpa"),
        loc!(Municipality, "beja.vidigueira", "Vidigueira"),
    ]),
    loc!(District, "braga", "Braga", [
        loc!(Municipality, "braga.amares", "Amares"),
        loc!(Municipality, "braga.barcelos", "Barcelos"),
        loc!(Municipality, "braga.braga", "Braga"),
        loc!(Municipality, "braga.cabeceiras-de-basto", "Cabeceiras de Basto"),
        loc!(Municipality, "braga.celorico-de-basto", "Celorico de Basto"),
        loc!(Municipality, "braga.esposende", "Esposende"),
        loc!(Municipality, "braga.fafe", "Fafe"),
        loc!(Municipality, "braga.guimaraes", "Guimarães"),
        loc!(Municipality, "braga.povoa-de-lanhoso", "Póvoa de Lanhoso"),
        loc!(Municipality, "braga.terras-de-bouro", "Terras de Bouro"),
        loc!(Municipality, "braga.vieira-do-minho", "Vieira do Minho"),
        loc!(Municipality, "braga.vila-nova-de-famalicao", "Vila Nova de Famalicão"),
        loc!(Municipality, "braga.vila-verde", "Vila Verde"),
        loc!(Municipality, "braga.vizela", "Vizela"),
    ]),
    loc!(District, "braganca", "Bragança", [
        loc!(Municipality, "braganca.alfandega-da-fe", "Alfândega da Fé"),
        loc!(Municipality, "braganca.braganca", "Bragança"),
        loc!(Municipality, "braganca.carrazeda-de-ansiaes", "Carrazeda de Ansiães"),
        loc!(Municipality, "braganca.freixo-de-espada-a-cinta", "Freixo de Espada à Cinta"),
        loc!(Municipality, "braganca.macedo-de-cavaleiros", "Macedo de Cavaleiros"),
        loc!(Municipality, "braganca.miranda-do-douro", "Miranda do Douro"),
        loc!(Municipality, "braganca.mirandela", "Mirandela"),
        loc!(Municipality, "braganca.mogadouro", "Mogadouro"),
        loc!(Municipality, "braganca.torre-de-moncorvo", "Torre de Moncorvo"),
        loc!(Municipality, "braganca.vila-flor", "Vila Flor"),
        loc!(Municipality, "braganca.vimioso", "Vimioso"),
        loc!(Municipality, "braganca.vinhais", "Vinhais"),
    ]),
    loc!(District, "castelo-branco", "Castelo Branco", [
        loc!(Municipality, "castelo-branco.belmonte", "Belmonte"),
        loc!(Municipality, "castelo-branco.castelo-branco", "Castelo Branco"),
        loc!(Municipality, "castelo-branco.covilha", "Covilhã"),
        loc!(Municipality, "castelo-branco.fundao", "Fundão"),
        loc!(Municipality, "castelo-branco.idanha-a-nova", "Idanha-a-Nova"),
        loc!(Municipality, "castelo-branco.oleiros", "Oleiros"),
        loc!(Municipality, "castelo-branco.penamacor", "Penamacor"),
        loc!(Municipality, "castelo-branco.proenca-a-nova", "Proença-a-Nova"),
        loc!(Municipality, "castelo-branco.serta", "Sertã"),
        loc!(Municipality, "castelo-branco.vila-de-rei", "Vila de Rei"),
        loc!(Municipality, "castelo-branco.vila-velha-de-rodao", "Vila Velha de Ródão"),
    ]),
    loc!(District, "coimbra", "Coimbra", [
        loc!(Municipality, "coimbra.arganil", "Arganil"),
        loc!(Municipality, "coimbra.cantanhede", "Cantanhede"),
        loc!(Municipality, "coimbra.coimbra", "Coimbra"),
        loc!(Municipality, "coimbra.condeixa-a-nova", "Condeixa-a-Nova"),
        loc!(Municipality, "coimbra.figueira-da-foz", "Figueira da Foz"),
        loc!(Municipality, "coimbra.gois", "Góis"),
        loc!(Municipality, "coimbra.lousa", "Lousã"),
        loc!(Municipality, "coimbra.mira", "Mira"),
        loc!(Municipality, "coimbra.miranda-do-corvo", "Miranda do Corvo"),
        loc!(Municipality, "coimbra.montemor-o-velho", "Montemor-o-Velho"),
        loc!(Municipality, "coimbra.oliveira-do-hospital", "Oliveira do Hospital"),
        loc!(Municipality, "coimbra.pampilhosa-da-serra", "Pampilhosa da Serra"),
        loc!(Municipality, "coimbra.penacova", "Penacova"),
        loc!(Municipality, "coimbra.penela", "Penela"),
        loc!(Municipality, "coimbra.soure", "Soure"),
        loc!(Municipality, "coimbra.tabua", "Tábua"),
        loc!(Municipality, "coimbra.vila-nova-de-poiares", "Vila Nova de Poiares"),
    ]),
    loc!(District, "evora", "Évora", [
        loc!(Municipality, "evora.alandroal", "Alandroal"),
        loc!(Municipality, "evora.arraiolos", "Arraiolos"),
        loc!(Municipality, "evora.borba", "Borba"),
        loc!(Municipality, "evora.estremoz", "Estremoz"),
        loc!(Municipality, "evora.evora", "Évora"),
        loc!(Municipality, "evora.montemor-o-novo", "Montemor-o-Novo"),
        loc!(Municipality, "evora.mora", "Mora"),
        loc!(Municipality, "evora.mourao", "Mourão"),
        loc!(Municipality, "evora.portel", "Portel"),
        loc!(Municipality, "evora.redondo", "Redondo"),
        loc!(Municipality, "evora.reguengos-de-monsaraz", "Reguengos de Monsaraz"),
        loc!(Municipality, "evora.vendas-novas", "Vendas Novas"),
        loc!(Municipality, "evora.viana-do-alentejo", "Viana do Alentejo"),
        loc!(Municipality, "evora.vila-vicosa", "Vila Viçosa"),
    ]),
    loc!(District, "faro", "Faro", [
        loc!(Municipality, "faro.albufeira", "Albufeira"),
        loc!(Municipality, "faro.alcoutim", "Alcoutim"),
        loc!(Municipality, "faro.aljezur", "Aljezur"),
        loc!(Municipality, "faro.castro-marim", "Castro Marim"),
        loc!(Municipality, "faro.faro", "Faro"),
        loc!(Municipality, "faro.lagoa", "Lagoa"),
        loc!(Municipality, "faro.lagos", "Lagos"),
        loc!(Municipality, "faro.loule", "Loulé"),
        loc!(Municipality, "faro.monchique", "Monchique"),
        loc!(Municipality, "faro.olhao", "Olhão"),
        loc!(Municipality, "faro.portimao", "Portimão"),
        loc!(Municipality, "faro.sao-bras-de-alportel", "São Brás de Alportel"),
        loc!(Municipality, "faro.silves", "Silves"),
        loc!(Municipality, "faro.tavira", "Tavira"),
        loc!(Municipality, "faro.vila-do-bispo", "Vila do Bispo"),
        loc!(Municipality, "faro.vila-real-de-santo-antonio", "Vila Real de Santo António"),
    ]),
    loc!(District, "guarda", "Guarda", [
        loc!(Municipality, "guarda.aguiar-da-beira", "Aguiar da Beira"),
        loc!(Municipality, "guarda.almeida", "Almeida"),
        loc!(Municipality, "guarda.celorico-da-beira", "Celorico da Beira"),
        loc!(Municipality, "guarda.figueira-de-castelo-rodrigo", "Figueira de Castelo Rodrigo"),
        loc!(Municipality, "guarda.fornos-de-algodres", "Fornos de Algodres"),
        loc!(Municipality, "guarda.gouveia", "Gouveia"),
        loc!(Municipality, "guarda.guarda", "Guarda"),
        loc!(Municipality, "guarda.manteigas", "Manteigas"),
        loc!(Municipality, "guarda.meda", "Mêda"),
        loc!(Municipality, "guarda.pinhel", "Pinhel"),
        loc!(Municipality, "guarda.sabugal", "Sabugal"),
        loc!(Municipality, "guarda.seia", "Seia"),
        loc!(Municipality, "guarda.trancoso", "Trancoso"),
        loc!(Municipality, "guarda.vila-nova-de-foz-coa", "Vila Nova de Foz Côa"),
    ]),
    loc!(District, "leiria", "Leiria", [
        loc!(Municipality, "leiria.alcobaca", "Alcobaça"),
        loc!(Municipality, "leiria.alvaiazere", "Alvaiázere"),
        loc!(Municipality, "leiria.ansiao", "Ansião"),
        loc!(Municipality, "leiria.batalha", "Batalha"),
        loc!(Municipality, "leiria.bombarral", "Bombarral"),
        loc!(Municipality, "leiria.caldas-da-rainha", "Caldas da Rainha"),
        loc!(Municipality, "leiria.castanheira-de-pera", "Castanheira de Pera"),
        loc!(Municipality, "leiria.figueiro-dos-vinhos", "Figueiró dos Vinhos"),
        loc!(Municipality, "leiria.leiria", "Leiria"),
        loc!(Municipality, "leiria.marinha-grande", "Marinha Grande"),
        loc!(Municipality, "leiria.nazare", "Nazaré"),
        loc!(Municipality, "leiria.obidos", "Óbidos"),
        loc!(Municipality, "leiria.pedrogao-grande", "Pedrógão Grande"),
        loc!(Municipality, "leiria.peniche", "Peniche"),
        loc!(Municipality, "leiria.pombal", "Pombal"),
        loc!(Municipality, "leiria.porto-de-mos", "Porto de Mós"),
    ]),
    loc!(District, "lisboa", "Lisboa", [
        loc!(Municipality, "lisboa.alenquer", "Alenquer"),
        loc!(Municipality, "lisboa.amadora", "Amadora"),
        loc!(Municipality, "lisboa.arruda-dos-vinhos", "Arruda dos Vinhos"),
        loc!(Municipality, "lisboa.azambuja", "Azambuja"),
        loc!(Municipality, "lisboa.cadaval", "Cadaval"),
        loc!(Municipality, "lisboa.cascais", "Cascais", [
            loc!(Parish, "lisboa.cascais.alcabideche", "Alcabideche"),
            loc!(Parish, "lisboa.cascais.carcavelos-e-parede", "Carcavelos e Parede"),
            loc!(Parish, "lisboa.cascais.cascais-e-estoril", "Cascais e Estoril"),
            loc!(Parish, "lisboa.cascais.sao-domingos-de-rana", "São Domingos de Rana"),
        ]),
        loc!(Municipality, "lisboa.lisboa", "Lisboa", [
            loc!(Parish, "lisboa.lisboa.ajuda", "Ajuda"),
            loc!(Parish, "lisboa.lisboa.alcantara", "Alcântara"),
            loc!(Parish, "lisboa.lisboa.alvalade", "Alvalade"),
            loc!(Parish, "lisboa.lisboa.areeiro", "Areeiro"),
            loc!(Parish, "lisboa.lisboa.arroios", "Arroios"),
            loc!(Parish, "lisboa.lisboa.avenidas-novas", "Avenidas Novas"),
            loc!(Parish, "lisboa.lisboa.beato", "Beato"),
            loc!(Parish, "lisboa.lisboa.belem", "Belém"),
            loc!(Parish, "lisboa.lisboa.benfica", "Benfica"),
            loc!(Parish, "lisboa.lisboa.campo-de-ourique", "Campo de Ourique"),
            loc!(Parish, "lisboa.lisboa.campolide", "Campolide"),
            loc!(Parish, "lisboa.lisboa.carnide", "Carnide"),
            loc!(Parish, "lisboa.lisboa.estrela", "Estrela"),
            loc!(Parish, "lisboa.lisboa.lumiar", "Lumiar"),
            loc!(Parish, "lisboa.lisboa.marvila", "Marvila"),
            loc!(Parish, "lisboa.lisboa.misericordia", "Misericórdia"),
            loc!(Parish, "lisboa.lisboa.olivais", "Olivais"),
            loc!(Parish, "lisboa.lisboa.parque-das-nacoes", "Parque das Nações"),
            loc!(Parish, "lisboa.lisboa.penha-de-franca", "Penha de França"),
            loc!(Parish, "lisboa.lisboa.santa-clara", "Santa Clara"),
            loc!(Parish, "lisboa.lisboa.santa-maria-maior", "Santa Maria Maior"),
            loc!(Parish, "lisboa.lisboa.santo-antonio", "Santo António"),
            loc!(Parish, "lisboa.lisboa.sao-domingos-de-benfica", "São Domingos de Benfica"),
            loc!(Parish, "lisboa.lisboa.sao-vicente", "São Vicente"),
        ]),
        loc!(Municipality, "lisboa.loures", "Loures"),
        loc!(Municipality, "lisboa.lourinha", "Lourinhã"),
        loc!(Municipality, "lisboa.mafra", "Mafra"),
        loc!(Municipality, "lisboa.odivelas", "Odivelas"),
        loc!(Municipality, "lisboa.oeiras", "Oeiras", [
            loc!(Parish, "lisboa.oeiras.alges-linda-a-velha-e-cruz-quebrada-dafundo", "Algés, Linda-a-Velha e Cruz Quebrada-Dafundo"),
            loc!(Parish, "lisboa.oeiras.barcarena", "Barcarena"),
            loc!(Parish, "lisboa.oeiras.carnaxide-e-queijas", "Carnaxide e Queijas"),
            loc!(Parish, "lisboa.oeiras.oeiras-e-sao-juliao-da-barra-paco-de-arcos-e-caxias", "Oeiras e São Julião da Barra, Paço de Arcos e Caxias"),
            loc!(Parish, "lisboa.oeiras.porto-salvo", "Porto Salvo"),
        ]),
        loc!(Municipality, "lisboa.sintra", "Sintra"),
        loc!(Municipality, "lisboa.sobral-de-monte-agraco", "Sobral de Monte Agraço"),
        loc!(Municipality, "lisboa.torres-vedras", "Torres Vedras"),
        loc!(Municipality, "lisboa.vila-franca-de-xira", "Vila Franca de Xira"),
    ]),
    loc!(District, "portalegre", "Portalegre", [
        loc!(Municipality, "portalegre.alter-do-chao", "Alter do Chão"),
        loc!(Municipality, "portalegre.arronches", "Arronches"),
        loc!(Municipality, "portalegre.avis", "Avis"),
        loc!(Municipality, "portalegre.campo-maior", "Campo Maior"),
        loc!(Municipality, "portalegre.castelo-de-vide", "Castelo de Vide"),
        loc!(Municipality, "portalegre.crato", "Crato"),
        loc!(Municipality, "portalegre.elvas", "Elvas"),
        loc!(Municipality, "portalegre.fronteira", "Fronteira"),
        loc!(Municipality, "portalegre.gaviao", "Gavião"),
        loc!(Municipality, "portalegre.marvao", "Marvão"),
        loc!(Municipality, "portalegre.monforte", "Monforte"),
        loc!(Municipality, "portalegre.nisa", "Nisa"),
        loc!(Municipality, "portalegre.ponte-de-sor", "Ponte de Sor"),
        loc!(Municipality, "portalegre.portalegre", "Portalegre"),
        loc!(Municipality, "portalegre.sousel", "Sousel"),
    ]),
    loc!(District, "porto", "Porto", [
        loc!(Municipality, "porto.amarante", "Amarante"),
        loc!(Municipality, "porto.baiao", "Baião"),
        loc!(Municipality, "porto.felgueiras", "Felgueiras"),
        loc!(Municipality, "porto.gondomar", "Gondomar"),
        loc!(Municipality, "porto.lousada", "Lousada"),
        loc!(Municipality, "porto.maia", "Maia"),
        loc!(Municipality, "porto.marco-de-canaveses", "Marco de Canaveses"),
        loc!(Municipality, "porto.matosinhos", "Matosinhos"),
        loc!(Municipality, "porto.pacos-de-ferreira", "Paços de Ferreira"),
        loc!(Municipality, "porto.paredes", "Paredes"),
        loc!(Municipality, "porto.penafiel", "Penafiel"),
        loc!(Municipality, "porto.porto", "Porto", [
            loc!(Parish, "porto.porto.aldoar-foz-do-douro-e-nevogilde", "Aldoar, Foz do Douro e Nevogilde"),
            loc!(Parish, "porto.porto.bonfim", "Bonfim"),
            loc!(Parish, "porto.porto.campanha", "Campanhã"),
            loc!(Parish, "porto.porto.cedofeita-santo-ildefonso-se-miragaia-sao-nicolau-e-vitoria", "Cedofeita, Santo Ildefonso, Sé, Miragaia, São Nicolau e Vitória"),
            loc!(Parish, "porto.porto.lordelo-do-ouro-e-massarelos", "Lordelo do Ouro e Massarelos"),
            loc!(Parish, "porto.porto.paranhos", "Paranhos"),
            loc!(Parish, "porto.porto.ramalde", "Ramalde"),
        ]),
        loc!(Municipality, "porto.povoa-de-varzim", "Póvoa de Varzim"),
        loc!(Municipality, "porto.santo-tirso", "Santo Tirso"),
        loc!(Municipality, "porto.trofa", "Trofa"),
        loc!(Municipality, "porto.valongo", "Valongo"),
        loc!(Municipality, "porto.vila-do-conde", "Vila do Conde"),
        loc!(Municipality, "porto.vila-nova-de-gaia", "Vila Nova de Gaia"),
    ]),
    loc!(District, "santarem", "Santarém", [
        loc!(Municipality, "santarem.abrantes", "Abrantes"),
        loc!(Municipality, "santarem.alcanena", "Alcanena"),
        loc!(Municipality, "santarem.almeirim", "Almeirim"),
        loc!(Municipality, "santarem.alpiarca", "Alpiarça"),
        loc!(Municipality, "santarem.benavente", "Benavente"),
        loc!(Municipality, "santarem.cartaxo", "Cartaxo"),
        loc!(Municipality, "santarem.chamusca", "Chamusca"),
        loc!(Municipality, "santarem.constancia", "Constância"),
        loc!(Municipality, "santarem.coruche", "Coruche"),
        loc!(Municipality, "santarem.entroncamento", "Entroncamento"),
        loc!(Municipality, "santarem.ferreira-do-zezere", "Ferreira do Zêzere"),
        loc!(Municipality, "santarem.golega", "Golegã"),
        loc!(Municipality, "santarem.macao", "Mação"),
        loc!(Municipality, "santarem.ourem", "Ourém"),
        loc!(Municipality, "santarem.rio-maior", "Rio Maior"),
        loc!(Municipality, "santarem.salvaterra-de-magos", "Salvaterra de Magos"),
        loc!(Municipality, "santarem.santarem", "Santarém"),
        loc!(Municipality, "santarem.sardoal", "Sardoal"),
        loc!(Municipality, "santarem.tomar", "Tomar"),
        loc!(Municipality, "santarem.torres-novas", "Torres Novas"),
        loc!(Municipality, "santarem.vila-nova-da-barquinha", "Vila Nova da Barquinha"),
    ]),
    loc!(District, "setubal", "Setúbal", [
        loc!(Municipality, "setubal.alcacer-do-sal", "Alcácer do Sal"),
        loc!(Municipality, "setubal.alcochete", "Alcochete"),
        loc!(Municipality, "setubal.almada", "Almada"),
        loc!(Municipality, "setubal.barreiro", "Barreiro"),
        loc!(Municipality, "setubal.grandola", "Grândola"),
        loc!(Municipality, "setubal.moita", "Moita"),
        loc!(Municipality, "setubal.montijo", "Montijo"),
        loc!(Municipality, "setubal.palmela", "Palmela"),
        loc!(Municipality, "setubal.santiago-do-cacem", "Santiago do Cacém"),
        loc!(Municipality, "setubal.seixal", "Seixal"),
        loc!(Municipality, "setubal.sesimbra", "Sesimbra"),
        loc!(Municipality, "setubal.setubal", "Setúbal"),
        loc!(Municipality, "setubal.sines", "Sines"),
    ]),
    loc!(District, "viana-do-castelo", "Viana do Castelo", [
        loc!(Municipality, "viana-do-castelo.arcos-de-valdevez", "Arcos de Valdevez"),
        loc!(Municipality, "viana-do-castelo.caminha", "Caminha"),
        loc!(Municipality, "viana-do-castelo.melgaco", "Melgaço"),
        loc!(Municipality, "viana-do-castelo.moncao", "Monção"),
        loc!(Municipality, "viana-do-castelo.paredes-de-coura", "Paredes de Coura"),
        loc!(Municipality, "viana-do-castelo.ponte-da-barca", "Ponte da Barca"),
        loc!(Municipality, "viana-do-castelo.ponte-de-lima", "Ponte de Lima"),
        loc!(Municipality, "viana-do-castelo.valenca", "Valença"),
        loc!(Municipality, "viana-do-castelo.viana-do-castelo", "Viana do Castelo"),
        loc!(Municipality, "viana-do-castelo.vila-nova-de-cerveira", "Vila Nova de Cerveira"),
    ]),
    loc!(District, "vila-real", "Vila Real", [
        loc!(Municipality, "vila-real.alijo", "Alijó"),
        loc!(Municipality, "vila-real.boticas", "Boticas"),
        loc!(Municipality, "vila-real.chaves", "Chaves"),
        loc!(Municipality, "vila-real.mesao-frio", "Mesão Frio"),
        loc!(Municipality, "vila-real.mondim-de-basto", "Mondim de Basto"),
        loc!(Municipality, "vila-real.montalegre", "Montalegre"),
        loc!(Municipality, "vila-real.murca", "Murça"),
        loc!(Municipality, "vila-real.peso-da-regua", "Peso da Régua"),
        loc!(Municipality, "vila-real.ribeira-de-pena", "Ribeira de Pena"),
        loc!(Municipality, "vila-real.sabrosa", "Sabrosa"),
        loc!(Municipality, "vila-real.santa-marta-de-penaguiao", "Santa Marta de Penaguião"),
        loc!(Municipality, "vila-real.valpacos", "Valpaços"),
        loc!(Municipality, "vila-real.vila-pouca-de-aguiar", "Vila Pouca de Aguiar"),
        loc!(Municipality, "vila-real.vila-real", "Vila Real"),
    ]),
    loc!(District, "viseu", "Viseu", [
        loc!(Municipality, "viseu.armamar", "Armamar"),
        loc!(Municipality, "viseu.carregal-do-sal", "Carregal do Sal"),
        loc!(Municipality, "viseu.castro-daire", "Castro Daire"),
        loc!(Municipality, "viseu.cinfaes", "Cinfães"),
        loc!(Municipality, "viseu.lamego", "Lamego"),
        loc!(Municipality, "viseu.mangualde", "Mangualde"),
        loc!(Municipality, "viseu.moimenta-da-beira", "Moimenta da Beira"),
        loc!(Municipality, "viseu.mortagua", "Mortágua"),
        loc!(Municipality, "viseu.nelas", "Nelas"),
        loc!(Municipality, "viseu.oliveira-de-frades", "Oliveira de Frades"),
        loc!(Municipality, "viseu.penalva-do-castelo", "Penalva do Castelo"),
        loc!(Municipality, "viseu.penedono", "Penedono"),
        loc!(Municipality, "viseu.resende", "Resende"),
        loc!(Municipality, "viseu.santa-comba-dao", "Santa Comba Dão"),
        loc!(Municipality, "viseu.sao-joao-da-pesqueira", "São João da Pesqueira"),
        loc!(Municipality, "viseu.sao-pedro-do-sul", "São Pedro do Sul"),
        loc!(Municipality, "viseu.satao", "Sátão"),
        loc!(Municipality, "viseu.sernancelhe", "Sernancelhe"),
        loc!(Municipality, "viseu.tabuaco", "Tabuaço"),
        loc!(Municipality, "viseu.tarouca", "Tarouca"),
        loc!(Municipality, "viseu.tondela", "Tondela"),
        loc!(Municipality, "viseu.vila-nova-de-paiva", "Vila Nova de Paiva"),
        loc!(Municipality, "viseu.viseu", "Viseu"),
        loc!(Municipality, "viseu.vouzela", "Vouzela"),
    ]),
    loc!(AutonomousRegion, "acores", "Açores", [
        loc!(Municipality, "acores.angra-do-heroismo", "Angra do Heroísmo"),
        loc!(Municipality, "acores.calheta", "Calheta"),
        loc!(Municipality, "acores.corvo", "Corvo"),
        loc!(Municipality, "acores.horta", "Horta"),
        loc!(Municipality, "acores.lagoa", "Lagoa"),
        loc!(Municipality, "acores.lajes-das-flores", "Lajes das Flores"),
        loc!(Municipality, "acores.lajes-do-pico", "Lajes do Pico"),
        loc!(Municipality, "acores.madalena", "Madalena"),
        loc!(Municipality, "acores.nordeste", "Nordeste"),
        loc!(Municipality, "acores.ponta-delgada", "Ponta Delgada"),
        loc!(Municipality, "acores.povoacao", "Povoação"),
        loc!(Municipality, "acores.ribeira-grande", "Ribeira Grande"),
        loc!(Municipality, "acores.santa-cruz-da-graciosa", "Santa Cruz da Graciosa"),
        loc!(Municipality, "acores.santa-cruz-das-flores", "Santa Cruz das Flores"),
        loc!(Municipality, "acores.sao-roque-do-pico", "São Roque do Pico"),
        loc!(Municipality, "acores.velas", "Velas"),
        loc!(Municipality, "acores.vila-da-praia-da-vitoria", "Vila da Praia da Vitória"),
        loc!(Municipality, "acores.vila-do-porto", "Vila do Porto"),
        loc!(Municipality, "acores.vila-franca-do-campo", "Vila Franca do Campo"),
    ]),
    loc!(AutonomousRegion, "madeira", "Madeira", [
        loc!(Municipality, "madeira.calheta", "Calheta"),
        loc!(Municipality, "madeira.camara-de-lobos", "Câmara de Lobos"),
        loc!(Municipality, "madeira.funchal", "Funchal", [
            loc!(Parish, "madeira.funchal.imaculado-coracao-de-maria", "Imaculado Coração de Maria"),
            loc!(Parish, "madeira.funchal.monte", "Monte"),
            loc!(Parish, "madeira.funchal.santa-luzia", "Santa Luzia"),
            loc!(Parish, "madeira.funchal.santa-maria-maior", "Santa Maria Maior"),
            loc!(Parish, "madeira.funchal.santo-antonio", "Santo António"),
            loc!(Parish, "madeira.funchal.sao-goncalo", "São Gonçalo"),
            loc!(Parish, "madeira.funchal.sao-martinho", "São Martinho"),
            loc!(Parish, "madeira.funchal.sao-pedro", "São Pedro"),
            loc!(Parish, "madeira.funchal.sao-roque", "São Roque"),
            loc!(Parish, "madeira.funchal.se", "Sé"),
        ]),
        loc!(Municipality, "madeira.machico", "Machico"),
        loc!(Municipality, "madeira.ponta-do-sol", "Ponta do Sol"),
        loc!(Municipality, "madeira.porto-moniz", "Porto Moniz"),
        loc!(Municipality, "madeira.porto-santo", "Porto Santo"),
        loc!(Municipality, "madeira.ribeira-brava", "Ribeira Brava"),
        loc!(Municipality, "madeira.santa-cruz", "Santa Cruz"),
        loc!(Municipality, "madeira.santana", "Santana"),
        loc!(Municipality, "madeira.sao-vicente", "São Vicente"),
    ]),
];
