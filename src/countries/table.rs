// Auto-generated from BFS data. DO NOT EDIT MANUALLY.
//
// Source: be-b-00.04-sg-01.xlsx
// Description: BFS Official Country and Territory Codes
//              (Staaten- und Gebietsverzeichnis)
//
// Data: (c) Swiss Federal Statistical Office (BFS), provided under Open
// Government Data (OGD) Switzerland terms ("Open use. Must provide the
// source.").
//
// Regenerate with: cargo run --bin import-countries

use crate::models::country::Country;

/// BFS country codes and multilingual names, sorted by ISO2 code.
pub static COUNTRY_CODES: &[Country] = &[
    Country {
        iso2: "AD",
        iso3: "AND",
        bfs_code: "8202",
        name_de: "Andorra",
        name_fr: "Andorre",
        name_it: "Andorra",
        name_en: "Andorra",
    },
    Country {
        iso2: "AE",
        iso3: "ARE",
        bfs_code: "8532",
        name_de: "Vereinigte Arabische Emirate",
        name_fr: "Emirats arabes unis",
        name_it: "Emirati arabi uniti",
        name_en: "United Arab Emirates",
    },
    Country {
        iso2: "AF",
        iso3: "AFG",
        bfs_code: "8501",
        name_de: "Afghanistan",
        name_fr: "Afghanistan",
        name_it: "Afghanistan",
        name_en: "Afghanistan",
    },
    Country {
        iso2: "AG",
        iso3: "ATG",
        bfs_code: "8442",
        name_de: "Antigua und Barbuda",
        name_fr: "Antigua-et-Barbuda",
        name_it: "Antigua e Barbuda",
        name_en: "Antigua and Barbuda",
    },
    Country {
        iso2: "AI",
        iso3: "AIA",
        bfs_code: "8446",
        name_de: "Anguilla",
        name_fr: "Anguilla",
        name_it: "Anguilla",
        name_en: "Anguilla",
    },
    Country {
        iso2: "AL",
        iso3: "ALB",
        bfs_code: "8201",
        name_de: "Albanien",
        name_fr: "Albanie",
        name_it: "Albania",
        name_en: "Albania",
    },
    Country {
        iso2: "AM",
        iso3: "ARM",
        bfs_code: "8560",
        name_de: "Armenien",
        name_fr: "Arménie",
        name_it: "Armenia",
        name_en: "Armenia",
    },
    Country {
        iso2: "AO",
        iso3: "AGO",
        bfs_code: "8305",
        name_de: "Angola",
        name_fr: "Angola",
        name_it: "Angola",
        name_en: "Angola",
    },
    Country {
        iso2: "AQ",
        iso3: "ATA",
        bfs_code: "8701",
        name_de: "Antarktis",
        name_fr: "Antarctique",
        name_it: "Antartide",
        name_en: "Antarctica",
    },
    Country {
        iso2: "AR",
        iso3: "ARG",
        bfs_code: "8401",
        name_de: "Argentinien",
        name_fr: "Argentine",
        name_it: "Argentina",
        name_en: "Argentina",
    },
    Country {
        iso2: "AS",
        iso3: "ASM",
        bfs_code: "8621",
        name_de: "Amerikanisch-Samoa",
        name_fr: "Samoa américaines",
        name_it: "Samoa americane",
        name_en: "American Samoa",
    },
    Country {
        iso2: "AT",
        iso3: "AUT",
        bfs_code: "8229",
        name_de: "Österreich",
        name_fr: "Autriche",
        name_it: "Austria",
        name_en: "Austria",
    },
    Country {
        iso2: "AU",
        iso3: "AUS",
        bfs_code: "8601",
        name_de: "Australien",
        name_fr: "Australie",
        name_it: "Australia",
        name_en: "Australia",
    },
    Country {
        iso2: "AW",
        iso3: "ABW",
        bfs_code: "8482",
        name_de: "Aruba",
        name_fr: "Aruba",
        name_it: "Aruba",
        name_en: "Aruba",
    },
    Country {
        iso2: "AX",
        iso3: "ALA",
        bfs_code: "8274",
        name_de: "Alandinseln",
        name_fr: "Îles d'Aland",
        name_it: "Isole di Aland",
        name_en: "Aland Islands",
    },
    Country {
        iso2: "AZ",
        iso3: "AZE",
        bfs_code: "8561",
        name_de: "Aserbaidschan",
        name_fr: "Azerbaïdjan",
        name_it: "Azerbaigian",
        name_en: "Azerbaijan",
    },
    Country {
        iso2: "BA",
        iso3: "BIH",
        bfs_code: "8252",
        name_de: "Bosnien und Herzegowina",
        name_fr: "Bosnie et Herzégovine",
        name_it: "Bosnia e Erzegovina",
        name_en: "Bosnia and Herzegovina",
    },
    Country {
        iso2: "BB",
        iso3: "BRB",
        bfs_code: "8403",
        name_de: "Barbados",
        name_fr: "Barbade",
        name_it: "Barbados",
        name_en: "Barbados",
    },
    Country {
        iso2: "BD",
        iso3: "BGD",
        bfs_code: "8546",
        name_de: "Bangladesch",
        name_fr: "Bangladesh",
        name_it: "Bangladesh",
        name_en: "Bangladesh",
    },
    Country {
        iso2: "BE",
        iso3: "BEL",
        bfs_code: "8204",
        name_de: "Belgien",
        name_fr: "Belgique",
        name_it: "Belgio",
        name_en: "Belgium",
    },
    Country {
        iso2: "BF",
        iso3: "BFA",
        bfs_code: "8337",
        name_de: "Burkina Faso",
        name_fr: "Burkina Faso",
        name_it: "Burkina Faso",
        name_en: "Burkina Faso",
    },
    Country {
        iso2: "BG",
        iso3: "BGR",
        bfs_code: "8205",
        name_de: "Bulgarien",
        name_fr: "Bulgarie",
        name_it: "Bulgaria",
        name_en: "Bulgaria",
    },
    Country {
        iso2: "BH",
        iso3: "BHR",
        bfs_code: "8502",
        name_de: "Bahrain",
        name_fr: "Bahreïn",
        name_it: "Bahrein",
        name_en: "Bahrain",
    },
    Country {
        iso2: "BI",
        iso3: "BDI",
        bfs_code: "8308",
        name_de: "Burundi",
        name_fr: "Burundi",
        name_it: "Burundi",
        name_en: "Burundi",
    },
    Country {
        iso2: "BJ",
        iso3: "BEN",
        bfs_code: "8309",
        name_de: "Benin",
        name_fr: "Bénin",
        name_it: "Benin",
        name_en: "Benin",
    },
    Country {
        iso2: "BL",
        iso3: "BLM",
        bfs_code: "8449",
        name_de: "Saint-Barthélemy",
        name_fr: "Saint-Barthélemy",
        name_it: "Saint-Barthélemy",
        name_en: "Saint Barthélemy",
    },
    Country {
        iso2: "BM",
        iso3: "BMU",
        bfs_code: "8404",
        name_de: "Bermuda",
        name_fr: "Bermudes",
        name_it: "Bermuda",
        name_en: "Bermuda",
    },
    Country {
        iso2: "BN",
        iso3: "BRN",
        bfs_code: "8504",
        name_de: "Brunei Darussalam",
        name_fr: "Brunéi Darussalam",
        name_it: "Brunei Darussalam",
        name_en: "Brunei",
    },
    Country {
        iso2: "BO",
        iso3: "BOL",
        bfs_code: "8405",
        name_de: "Bolivien",
        name_fr: "Bolivie",
        name_it: "Bolivia",
        name_en: "Bolivia",
    },
    Country {
        iso2: "BQ",
        iso3: "BES",
        bfs_code: "8486",
        name_de: "Bonaire, Saint Eustatius und Saba",
        name_fr: "Bonaire, Saint Eustatius et Saba",
        name_it: "Bonaire, Saint Eustatius e Saba",
        name_en: "Bonaire, Saint Eustatius and Saba",
    },
    Country {
        iso2: "BR",
        iso3: "BRA",
        bfs_code: "8406",
        name_de: "Brasilien",
        name_fr: "Brésil",
        name_it: "Brasile",
        name_en: "Brazil",
    },
    Country {
        iso2: "BS",
        iso3: "BHS",
        bfs_code: "8402",
        name_de: "Bahamas",
        name_fr: "Bahamas",
        name_it: "Bahamas",
        name_en: "Bahamas",
    },
    Country {
        iso2: "BT",
        iso3: "BTN",
        bfs_code: "8503",
        name_de: "Bhutan",
        name_fr: "Bhoutan",
        name_it: "Bhutan",
        name_en: "Bhutan",
    },
    Country {
        iso2: "BV",
        iso3: "BVT",
        bfs_code: "8702",
        name_de: "Bouvetinsel",
        name_fr: "Île Bouvet",
        name_it: "Isola Bouvet",
        name_en: "Bouvet Island",
    },
    Country {
        iso2: "BW",
        iso3: "BWA",
        bfs_code: "8307",
        name_de: "Botsuana",
        name_fr: "Botswana",
        name_it: "Botswana",
        name_en: "Botswana",
    },
    Country {
        iso2: "BY",
        iso3: "BLR",
        bfs_code: "8266",
        name_de: "Belarus",
        name_fr: "Bélarus",
        name_it: "Belarus",
        name_en: "Belarus",
    },
    Country {
        iso2: "BZ",
        iso3: "BLZ",
        bfs_code: "8419",
        name_de: "Belize",
        name_fr: "Belize",
        name_it: "Belize",
        name_en: "Belize",
    },
    Country {
        iso2: "CA",
        iso3: "CAN",
        bfs_code: "8423",
        name_de: "Kanada",
        name_fr: "Canada",
        name_it: "Canada",
        name_en: "Canada",
    },
    Country {
        iso2: "CC",
        iso3: "CCK",
        bfs_code: "8652",
        name_de: "Kokosinseln",
        name_fr: "Îles Cocos (Keeling)",
        name_it: "Isole Cocos",
        name_en: "Cocos (Keeling) Islands",
    },
    Country {
        iso2: "CD",
        iso3: "COD",
        bfs_code: "8323",
        name_de: "Kongo (Kinshasa)",
        name_fr: "Congo (Kinshasa)",
        name_it: "Congo (Kinshasa)",
        name_en: "Congo (Kinshasa)",
    },
    Country {
        iso2: "CF",
        iso3: "CAF",
        bfs_code: "8360",
        name_de: "Zentralafrikanische Republik",
        name_fr: "République centrafricaine",
        name_it: "Repubblica centrafricana",
        name_en: "Central African Republic",
    },
    Country {
        iso2: "CG",
        iso3: "COG",
        bfs_code: "8322",
        name_de: "Kongo (Brazzaville)",
        name_fr: "Congo (Brazzaville)",
        name_it: "Congo (Brazzaville)",
        name_en: "Congo (Brazzaville)",
    },
    Country {
        iso2: "CH",
        iso3: "CHE",
        bfs_code: "8100",
        name_de: "Schweiz",
        name_fr: "Suisse",
        name_it: "Svizzera",
        name_en: "Switzerland",
    },
    Country {
        iso2: "CI",
        iso3: "CIV",
        bfs_code: "8310",
        name_de: "Côte d'Ivoire",
        name_fr: "Côte d'Ivoire",
        name_it: "Côte d'Ivoire",
        name_en: "Côte d'Ivoire",
    },
    Country {
        iso2: "CK",
        iso3: "COK",
        bfs_code: "8682",
        name_de: "Cookinseln",
        name_fr: "Îles Cook",
        name_it: "Isole Cook",
        name_en: "Cook Islands",
    },
    Country {
        iso2: "CL",
        iso3: "CHL",
        bfs_code: "8407",
        name_de: "Chile",
        name_fr: "Chili",
        name_it: "Cile",
        name_en: "Chile",
    },
    Country {
        iso2: "CM",
        iso3: "CMR",
        bfs_code: "8317",
        name_de: "Kamerun",
        name_fr: "Cameroun",
        name_it: "Camerun",
        name_en: "Cameroon",
    },
    Country {
        iso2: "CN",
        iso3: "CHN",
        bfs_code: "8508",
        name_de: "China",
        name_fr: "Chine",
        name_it: "Cina",
        name_en: "China",
    },
    Country {
        iso2: "CO",
        iso3: "COL",
        bfs_code: "8424",
        name_de: "Kolumbien",
        name_fr: "Colombie",
        name_it: "Colombia",
        name_en: "Colombia",
    },
    Country {
        iso2: "CR",
        iso3: "CRI",
        bfs_code: "8408",
        name_de: "Costa Rica",
        name_fr: "Costa Rica",
        name_it: "Costa Rica",
        name_en: "Costa Rica",
    },
    Country {
        iso2: "CU",
        iso3: "CUB",
        bfs_code: "8425",
        name_de: "Kuba",
        name_fr: "Cuba",
        name_it: "Cuba",
        name_en: "Cuba",
    },
    Country {
        iso2: "CV",
        iso3: "CPV",
        bfs_code: "8319",
        name_de: "Cabo Verde",
        name_fr: "Cabo Verde",
        name_it: "Cabo Verde",
        name_en: "Cabo Verde",
    },
    Country {
        iso2: "CW",
        iso3: "CUW",
        bfs_code: "8484",
        name_de: "Curaçao",
        name_fr: "Curaçao",
        name_it: "Curaçao",
        name_en: "Curaçao",
    },
    Country {
        iso2: "CX",
        iso3: "CXR",
        bfs_code: "8655",
        name_de: "Weihnachtsinsel",
        name_fr: "Île Christmas (Australie)",
        name_it: "Isola Christmas",
        name_en: "Christmas Island",
    },
    Country {
        iso2: "CY",
        iso3: "CYP",
        bfs_code: "8242",
        name_de: "Zypern",
        name_fr: "Chypre",
        name_it: "Cipro",
        name_en: "Cyprus",
    },
    Country {
        iso2: "CZ",
        iso3: "CZE",
        bfs_code: "8244",
        name_de: "Tschechien",
        name_fr: "Tchéquie",
        name_it: "Cechia",
        name_en: "Czechia",
    },
    Country {
        iso2: "DE",
        iso3: "DEU",
        bfs_code: "8207",
        name_de: "Deutschland",
        name_fr: "Allemagne",
        name_it: "Germania",
        name_en: "Germany",
    },
    Country {
        iso2: "DJ",
        iso3: "DJI",
        bfs_code: "8303",
        name_de: "Dschibuti",
        name_fr: "Djibouti",
        name_it: "Gibuti",
        name_en: "Djibouti",
    },
    Country {
        iso2: "DK",
        iso3: "DNK",
        bfs_code: "8206",
        name_de: "Dänemark",
        name_fr: "Danemark",
        name_it: "Danimarca",
        name_en: "Denmark",
    },
    Country {
        iso2: "DM",
        iso3: "DMA",
        bfs_code: "8440",
        name_de: "Dominica",
        name_fr: "Dominique",
        name_it: "Dominica",
        name_en: "Dominica",
    },
    Country {
        iso2: "DO",
        iso3: "DOM",
        bfs_code: "8409",
        name_de: "Dominikanische Republik",
        name_fr: "République dominicaine",
        name_it: "Repubblica dominicana",
        name_en: "Dominican Republic",
    },
    Country {
        iso2: "DZ",
        iso3: "DZA",
        bfs_code: "8304",
        name_de: "Algerien",
        name_fr: "Algérie",
        name_it: "Algeria",
        name_en: "Algeria",
    },
    Country {
        iso2: "EC",
        iso3: "ECU",
        bfs_code: "8410",
        name_de: "Ecuador",
        name_fr: "Équateur",
        name_it: "Ecuador",
        name_en: "Ecuador",
    },
    Country {
        iso2: "EE",
        iso3: "EST",
        bfs_code: "8260",
        name_de: "Estland",
        name_fr: "Estonie",
        name_it: "Estonia",
        name_en: "Estonia",
    },
    Country {
        iso2: "EG",
        iso3: "EGY",
        bfs_code: "8359",
        name_de: "Ägypten",
        name_fr: "Égypte",
        name_it: "Egitto",
        name_en: "Egypt",
    },
    Country {
        iso2: "EH",
        iso3: "ESH",
        bfs_code: "8372",
        name_de: "Westsahara",
        name_fr: "Sahara Occidental",
        name_it: "Sahara Occidentale",
        name_en: "Western Sahara",
    },
    Country {
        iso2: "ER",
        iso3: "ERI",
        bfs_code: "8362",
        name_de: "Eritrea",
        name_fr: "Érythrée",
        name_it: "Eritrea",
        name_en: "Eritrea",
    },
    Country {
        iso2: "ES",
        iso3: "ESP",
        bfs_code: "8236",
        name_de: "Spanien",
        name_fr: "Espagne",
        name_it: "Spagna",
        name_en: "Spain",
    },
    Country {
        iso2: "ET",
        iso3: "ETH",
        bfs_code: "8302",
        name_de: "Äthiopien",
        name_fr: "Éthiopie",
        name_it: "Etiopia",
        name_en: "Ethiopia",
    },
    Country {
        iso2: "FI",
        iso3: "FIN",
        bfs_code: "8211",
        name_de: "Finnland",
        name_fr: "Finlande",
        name_it: "Finlandia",
        name_en: "Finland",
    },
    Country {
        iso2: "FJ",
        iso3: "FJI",
        bfs_code: "8602",
        name_de: "Fidschi",
        name_fr: "Fidji",
        name_it: "Figi",
        name_en: "Fiji",
    },
    Country {
        iso2: "FK",
        iso3: "FLK",
        bfs_code: "8412",
        name_de: "Falklandinseln",
        name_fr: "Îles Falkland",
        name_it: "Isole Falkland",
        name_en: "Falkland Islands",
    },
    Country {
        iso2: "FM",
        iso3: "FSM",
        bfs_code: "8618",
        name_de: "Mikronesien",
        name_fr: "Micronésie",
        name_it: "Micronesia",
        name_en: "Micronesia",
    },
    Country {
        iso2: "FO",
        iso3: "FRO",
        bfs_code: "8210",
        name_de: "Färöer",
        name_fr: "Îles Féroé",
        name_it: "Isole Faer Oer",
        name_en: "Faeroe Islands",
    },
    Country {
        iso2: "FR",
        iso3: "FRA",
        bfs_code: "8212",
        name_de: "Frankreich",
        name_fr: "France",
        name_it: "Francia",
        name_en: "France",
    },
    Country {
        iso2: "GA",
        iso3: "GAB",
        bfs_code: "8311",
        name_de: "Gabun",
        name_fr: "Gabon",
        name_it: "Gabon",
        name_en: "Gabon",
    },
    Country {
        iso2: "GB",
        iso3: "GBR",
        bfs_code: "8215",
        name_de: "Vereinigtes Königreich",
        name_fr: "Royaume-Uni",
        name_it: "Regno Unito",
        name_en: "United Kingdom",
    },
    Country {
        iso2: "GD",
        iso3: "GRD",
        bfs_code: "8441",
        name_de: "Grenada",
        name_fr: "Grenade",
        name_it: "Grenada",
        name_en: "Grenada",
    },
    Country {
        iso2: "GE",
        iso3: "GEO",
        bfs_code: "8562",
        name_de: "Georgien",
        name_fr: "Géorgie",
        name_it: "Georgia",
        name_en: "Georgia",
    },
    Country {
        iso2: "GF",
        iso3: "GUF",
        bfs_code: "8416",
        name_de: "Französisch-Guayana",
        name_fr: "Guyane Française",
        name_it: "Guiana Francese",
        name_en: "French Guyana",
    },
    Country {
        iso2: "GG",
        iso3: "GGY",
        bfs_code: "8272",
        name_de: "Guernsey",
        name_fr: "Guernesey",
        name_it: "Guernsey",
        name_en: "Guernsey",
    },
    Country {
        iso2: "GH",
        iso3: "GHA",
        bfs_code: "8313",
        name_de: "Ghana",
        name_fr: "Ghana",
        name_it: "Ghana",
        name_en: "Ghana",
    },
    Country {
        iso2: "GI",
        iso3: "GIB",
        bfs_code: "8213",
        name_de: "Gibraltar",
        name_fr: "Gibraltar",
        name_it: "Gibilterra",
        name_en: "Gibraltar",
    },
    Country {
        iso2: "GL",
        iso3: "GRL",
        bfs_code: "8413",
        name_de: "Grönland",
        name_fr: "Groenland",
        name_it: "Groenlandia",
        name_en: "Greenland",
    },
    Country {
        iso2: "GM",
        iso3: "GMB",
        bfs_code: "8312",
        name_de: "Gambia",
        name_fr: "Gambie",
        name_it: "Gambia",
        name_en: "Gambia",
    },
    Country {
        iso2: "GN",
        iso3: "GIN",
        bfs_code: "8315",
        name_de: "Guinea",
        name_fr: "Guinée",
        name_it: "Guinea",
        name_en: "Guinea",
    },
    Country {
        iso2: "GP",
        iso3: "GLP",
        bfs_code: "8414",
        name_de: "Guadeloupe",
        name_fr: "Guadeloupe",
        name_it: "Guadalupa",
        name_en: "Guadeloupe",
    },
    Country {
        iso2: "GQ",
        iso3: "GNQ",
        bfs_code: "8301",
        name_de: "Äquatorialguinea",
        name_fr: "Guinée équatoriale",
        name_it: "Guinea equatoriale",
        name_en: "Equatorial Guinea",
    },
    Country {
        iso2: "GR",
        iso3: "GRC",
        bfs_code: "8214",
        name_de: "Griechenland",
        name_fr: "Grèce",
        name_it: "Grecia",
        name_en: "Greece",
    },
    Country {
        iso2: "GS",
        iso3: "SGS",
        bfs_code: "8483",
        name_de: "Südgeorgien und Südliche Sandwichinseln",
        name_fr: "Géorgie du Sud et Îles Sandwich du Sud",
        name_it: "Isole Georgia del Sud e Sandwich del Sud",
        name_en: "South Georgia and the South Sandwich Islands",
    },
    Country {
        iso2: "GT",
        iso3: "GTM",
        bfs_code: "8415",
        name_de: "Guatemala",
        name_fr: "Guatemala",
        name_it: "Guatemala",
        name_en: "Guatemala",
    },
    Country {
        iso2: "GU",
        iso3: "GUM",
        bfs_code: "8632",
        name_de: "Guam",
        name_fr: "Guam",
        name_it: "Guam",
        name_en: "Guam",
    },
    Country {
        iso2: "GW",
        iso3: "GNB",
        bfs_code: "8314",
        name_de: "Guinea-Bissau",
        name_fr: "Guinée-Bissau",
        name_it: "Guinea-Bissau",
        name_en: "Guinea-Bissau",
    },
    Country {
        iso2: "GY",
        iso3: "GUY",
        bfs_code: "8417",
        name_de: "Guyana",
        name_fr: "Guyana",
        name_it: "Guyana",
        name_en: "Guyana",
    },
    Country {
        iso2: "HK",
        iso3: "HKG",
        bfs_code: "8509",
        name_de: "Hongkong",
        name_fr: "Hong Kong",
        name_it: "Hong Kong",
        name_en: "Hong Kong",
    },
    Country {
        iso2: "HM",
        iso3: "HMD",
        bfs_code: "8653",
        name_de: "Heard und McDonaldinseln",
        name_fr: "Îles-Heard-et-McDonald",
        name_it: "Isole Heard e McDonald",
        name_en: "Heard Island and McDonald Islands",
    },
    Country {
        iso2: "HN",
        iso3: "HND",
        bfs_code: "8420",
        name_de: "Honduras",
        name_fr: "Honduras",
        name_it: "Honduras",
        name_en: "Honduras",
    },
    Country {
        iso2: "HR",
        iso3: "HRV",
        bfs_code: "8250",
        name_de: "Kroatien",
        name_fr: "Croatie",
        name_it: "Croazia",
        name_en: "Croatia",
    },
    Country {
        iso2: "HT",
        iso3: "HTI",
        bfs_code: "8418",
        name_de: "Haiti",
        name_fr: "Haïti",
        name_it: "Haiti",
        name_en: "Haiti",
    },
    Country {
        iso2: "HU",
        iso3: "HUN",
        bfs_code: "8240",
        name_de: "Ungarn",
        name_fr: "Hongrie",
        name_it: "Ungheria",
        name_en: "Hungary",
    },
    Country {
        iso2: "ID",
        iso3: "IDN",
        bfs_code: "8511",
        name_de: "Indonesien",
        name_fr: "Indonésie",
        name_it: "Indonesia",
        name_en: "Indonesia",
    },
    Country {
        iso2: "IE",
        iso3: "IRL",
        bfs_code: "8216",
        name_de: "Irland",
        name_fr: "Irlande",
        name_it: "Irlanda",
        name_en: "Ireland",
    },
    Country {
        iso2: "IL",
        iso3: "ISR",
        bfs_code: "8514",
        name_de: "Israel",
        name_fr: "Israël",
        name_it: "Israele",
        name_en: "Israel",
    },
    Country {
        iso2: "IM",
        iso3: "IMN",
        bfs_code: "8225",
        name_de: "Insel Man",
        name_fr: "Île de Man",
        name_it: "Isola di Man",
        name_en: "Isle of Man",
    },
    Country {
        iso2: "IN",
        iso3: "IND",
        bfs_code: "8510",
        name_de: "Indien",
        name_fr: "Inde",
        name_it: "India",
        name_en: "India",
    },
    Country {
        iso2: "IO",
        iso3: "IOT",
        bfs_code: "8371",
        name_de: "Britische Territorien im Indischen Ozean",
        name_fr: "Territoires britanniques dans l'océan indien",
        name_it: "Territori britannici nell'oceano indiano",
        name_en: "British Territories in the Indian Ocean",
    },
    Country {
        iso2: "IQ",
        iso3: "IRQ",
        bfs_code: "8512",
        name_de: "Irak",
        name_fr: "Irak",
        name_it: "Iraq",
        name_en: "Iraq",
    },
    Country {
        iso2: "IR",
        iso3: "IRN",
        bfs_code: "8513",
        name_de: "Iran",
        name_fr: "Iran",
        name_it: "Iran",
        name_en: "Iran",
    },
    Country {
        iso2: "IS",
        iso3: "ISL",
        bfs_code: "8217",
        name_de: "Island",
        name_fr: "Islande",
        name_it: "Islanda",
        name_en: "Iceland",
    },
    Country {
        iso2: "IT",
        iso3: "ITA",
        bfs_code: "8218",
        name_de: "Italien",
        name_fr: "Italie",
        name_it: "Italia",
        name_en: "Italy",
    },
    Country {
        iso2: "JE",
        iso3: "JEY",
        bfs_code: "8271",
        name_de: "Jersey",
        name_fr: "Jersey",
        name_it: "Jersey",
        name_en: "Jersey",
    },
    Country {
        iso2: "JM",
        iso3: "JAM",
        bfs_code: "8421",
        name_de: "Jamaika",
        name_fr: "Jamaïque",
        name_it: "Giamaica",
        name_en: "Jamaica",
    },
    Country {
        iso2: "JO",
        iso3: "JOR",
        bfs_code: "8517",
        name_de: "Jordanien",
        name_fr: "Jordanie",
        name_it: "Giordania",
        name_en: "Jordan",
    },
    Country {
        iso2: "JP",
        iso3: "JPN",
        bfs_code: "8515",
        name_de: "Japan",
        name_fr: "Japon",
        name_it: "Giappone",
        name_en: "Japan",
    },
    Country {
        iso2: "KE",
        iso3: "KEN",
        bfs_code: "8320",
        name_de: "Kenia",
        name_fr: "Kenya",
        name_it: "Kenia",
        name_en: "Kenya",
    },
    Country {
        iso2: "KG",
        iso3: "KGZ",
        bfs_code: "8564",
        name_de: "Kirgisistan",
        name_fr: "Kirghizistan",
        name_it: "Kirghizistan",
        name_en: "Kyrgyzstan",
    },
    Country {
        iso2: "KH",
        iso3: "KHM",
        bfs_code: "8518",
        name_de: "Kambodscha",
        name_fr: "Cambodge",
        name_it: "Cambogia",
        name_en: "Cambodia",
    },
    Country {
        iso2: "KI",
        iso3: "KIR",
        bfs_code: "8616",
        name_de: "Kiribati",
        name_fr: "Kiribati",
        name_it: "Kiribati",
        name_en: "Kiribati",
    },
    Country {
        iso2: "KM",
        iso3: "COM",
        bfs_code: "8321",
        name_de: "Komoren",
        name_fr: "Comores",
        name_it: "Comore",
        name_en: "Comoros",
    },
    Country {
        iso2: "KN",
        iso3: "KNA",
        bfs_code: "8445",
        name_de: "St. Kitts und Nevis",
        name_fr: "Saint-Kitts-et-Nevis",
        name_it: "Saint Kitts e Nevis",
        name_en: "Saint Kitts and Nevis",
    },
    Country {
        iso2: "KP",
        iso3: "PRK",
        bfs_code: "8530",
        name_de: "Korea (Nord-)",
        name_fr: "Corée (Nord)",
        name_it: "Corea (Nord)",
        name_en: "North Korea",
    },
    Country {
        iso2: "KR",
        iso3: "KOR",
        bfs_code: "8539",
        name_de: "Korea (Süd-)",
        name_fr: "Corée (Sud)",
        name_it: "Corea (Sud)",
        name_en: "South Korea",
    },
    Country {
        iso2: "KW",
        iso3: "KWT",
        bfs_code: "8521",
        name_de: "Kuwait",
        name_fr: "Koweït",
        name_it: "Kuwait",
        name_en: "Kuwait",
    },
    Country {
        iso2: "KY",
        iso3: "CYM",
        bfs_code: "8473",
        name_de: "Kaimaninseln",
        name_fr: "Îles Cayman",
        name_it: "Isole Cayman",
        name_en: "Cayman Islands",
    },
    Country {
        iso2: "KZ",
        iso3: "KAZ",
        bfs_code: "8563",
        name_de: "Kasachstan",
        name_fr: "Kazakhstan",
        name_it: "Kazakstan",
        name_en: "Kazakhstan",
    },
    Country {
        iso2: "LA",
        iso3: "LAO",
        bfs_code: "8522",
        name_de: "Laos",
        name_fr: "Laos",
        name_it: "Laos",
        name_en: "Laos",
    },
    Country {
        iso2: "LB",
        iso3: "LBN",
        bfs_code: "8523",
        name_de: "Libanon",
        name_fr: "Liban",
        name_it: "Libano",
        name_en: "Lebanon",
    },
    Country {
        iso2: "LC",
        iso3: "LCA",
        bfs_code: "8443",
        name_de: "St. Lucia",
        name_fr: "Sainte-Lucie",
        name_it: "Saint Lucia",
        name_en: "Saint Lucia",
    },
    Country {
        iso2: "LI",
        iso3: "LIE",
        bfs_code: "8222",
        name_de: "Liechtenstein",
        name_fr: "Liechtenstein",
        name_it: "Liechtenstein",
        name_en: "Liechtenstein",
    },
    Country {
        iso2: "LK",
        iso3: "LKA",
        bfs_code: "8506",
        name_de: "Sri Lanka",
        name_fr: "Sri Lanka",
        name_it: "Sri Lanka",
        name_en: "Sri Lanka",
    },
    Country {
        iso2: "LR",
        iso3: "LBR",
        bfs_code: "8325",
        name_de: "Liberia",
        name_fr: "Libéria",
        name_it: "Liberia",
        name_en: "Liberia",
    },
    Country {
        iso2: "LS",
        iso3: "LSO",
        bfs_code: "8324",
        name_de: "Lesotho",
        name_fr: "Lesotho",
        name_it: "Lesotho",
        name_en: "Lesotho",
    },
    Country {
        iso2: "LT",
        iso3: "LTU",
        bfs_code: "8262",
        name_de: "Litauen",
        name_fr: "Lituanie",
        name_it: "Lituania",
        name_en: "Lithuania",
    },
    Country {
        iso2: "LU",
        iso3: "LUX",
        bfs_code: "8223",
        name_de: "Luxemburg",
        name_fr: "Luxembourg",
        name_it: "Lussemburgo",
        name_en: "Luxembourg",
    },
    Country {
        iso2: "LV",
        iso3: "LVA",
        bfs_code: "8261",
        name_de: "Lettland",
        name_fr: "Lettonie",
        name_it: "Lettonia",
        name_en: "Latvia",
    },
    Country {
        iso2: "LY",
        iso3: "LBY",
        bfs_code: "8326",
        name_de: "Libyen",
        name_fr: "Libye",
        name_it: "Libia",
        name_en: "Libya",
    },
    Country {
        iso2: "MA",
        iso3: "MAR",
        bfs_code: "8331",
        name_de: "Marokko",
        name_fr: "Maroc",
        name_it: "Marocco",
        name_en: "Morocco",
    },
    Country {
        iso2: "MC",
        iso3: "MCO",
        bfs_code: "8226",
        name_de: "Monaco",
        name_fr: "Monaco",
        name_it: "Monaco",
        name_en: "Monaco",
    },
    Country {
        iso2: "MD",
        iso3: "MDA",
        bfs_code: "8263",
        name_de: "Moldova",
        name_fr: "Moldova",
        name_it: "Moldova",
        name_en: "Moldova",
    },
    Country {
        iso2: "ME",
        iso3: "MNE",
        bfs_code: "8254",
        name_de: "Montenegro",
        name_fr: "Monténégro",
        name_it: "Montenegro",
        name_en: "Montenegro",
    },
    Country {
        iso2: "MF",
        iso3: "MAF",
        bfs_code: "8448",
        name_de: "Saint-Martin (Frankreich)",
        name_fr: "Saint-Martin (France)",
        name_it: "Saint-Martin (Francia)",
        name_en: "Saint Martin (France)",
    },
    Country {
        iso2: "MG",
        iso3: "MDG",
        bfs_code: "8327",
        name_de: "Madagaskar",
        name_fr: "Madagascar",
        name_it: "Madagascar",
        name_en: "Madagascar",
    },
    Country {
        iso2: "MH",
        iso3: "MHL",
        bfs_code: "8617",
        name_de: "Marshallinseln",
        name_fr: "Îles Marshall",
        name_it: "Isole Marshall",
        name_en: "Marshall Islands",
    },
    Country {
        iso2: "MK",
        iso3: "MKD",
        bfs_code: "8255",
        name_de: "Mazedonien",
        name_fr: "Macédoine",
        name_it: "Macedonia",
        name_en: "Macedonia",
    },
    Country {
        iso2: "ML",
        iso3: "MLI",
        bfs_code: "8330",
        name_de: "Mali",
        name_fr: "Mali",
        name_it: "Mali",
        name_en: "Mali",
    },
    Country {
        iso2: "MM",
        iso3: "MMR",
        bfs_code: "8505",
        name_de: "Myanmar",
        name_fr: "Myanmar",
        name_it: "Myanmar",
        name_en: "Myanmar",
    },
    Country {
        iso2: "MN",
        iso3: "MNG",
        bfs_code: "8528",
        name_de: "Mongolei",
        name_fr: "Mongolie",
        name_it: "Mongolia",
        name_en: "Mongolia",
    },
    Country {
        iso2: "MO",
        iso3: "MAC",
        bfs_code: "8524",
        name_de: "Macao",
        name_fr: "Macao",
        name_it: "Macao",
        name_en: "Macao",
    },
    Country {
        iso2: "MP",
        iso3: "MNP",
        bfs_code: "8630",
        name_de: "Nördliche Marianen",
        name_fr: "Mariannes du Nord",
        name_it: "Marianne del Nord",
        name_en: "Northern Marianas",
    },
    Country {
        iso2: "MQ",
        iso3: "MTQ",
        bfs_code: "8426",
        name_de: "Martinique",
        name_fr: "Martinique",
        name_it: "Martinica",
        name_en: "Martinique",
    },
    Country {
        iso2: "MR",
        iso3: "MRT",
        bfs_code: "8332",
        name_de: "Mauretanien",
        name_fr: "Mauritanie",
        name_it: "Mauritania",
        name_en: "Mauritania",
    },
    Country {
        iso2: "MS",
        iso3: "MSR",
        bfs_code: "8475",
        name_de: "Montserrat",
        name_fr: "Montserrat",
        name_it: "Monserrat",
        name_en: "Montserrat",
    },
    Country {
        iso2: "MT",
        iso3: "MLT",
        bfs_code: "8224",
        name_de: "Malta",
        name_fr: "Malte",
        name_it: "Malta",
        name_en: "Malta",
    },
    Country {
        iso2: "MU",
        iso3: "MUS",
        bfs_code: "8333",
        name_de: "Mauritius",
        name_fr: "Maurice",
        name_it: "Maurizio",
        name_en: "Mauritius",
    },
    Country {
        iso2: "MV",
        iso3: "MDV",
        bfs_code: "8526",
        name_de: "Malediven",
        name_fr: "Maldives",
        name_it: "Maldive",
        name_en: "Maldives",
    },
    Country {
        iso2: "MW",
        iso3: "MWI",
        bfs_code: "8329",
        name_de: "Malawi",
        name_fr: "Malawi",
        name_it: "Malawi",
        name_en: "Malawi",
    },
    Country {
        iso2: "MX",
        iso3: "MEX",
        bfs_code: "8427",
        name_de: "Mexiko",
        name_fr: "Mexique",
        name_it: "Messico",
        name_en: "Mexico",
    },
    Country {
        iso2: "MY",
        iso3: "MYS",
        bfs_code: "8525",
        name_de: "Malaysia",
        name_fr: "Malaisie",
        name_it: "Malaysia",
        name_en: "Malaysia",
    },
    Country {
        iso2: "MZ",
        iso3: "MOZ",
        bfs_code: "8334",
        name_de: "Mosambik",
        name_fr: "Mozambique",
        name_it: "Mozambico",
        name_en: "Mozambique",
    },
    Country {
        iso2: "NA",
        iso3: "NAM",
        bfs_code: "8351",
        name_de: "Namibia",
        name_fr: "Namibie",
        name_it: "Namibia",
        name_en: "Namibia",
    },
    Country {
        iso2: "NC",
        iso3: "NCL",
        bfs_code: "8606",
        name_de: "Neukaledonien",
        name_fr: "Nouvelle-Calédonie",
        name_it: "Nuova Caledonia",
        name_en: "New Caledonia",
    },
    Country {
        iso2: "NE",
        iso3: "NER",
        bfs_code: "8335",
        name_de: "Niger",
        name_fr: "Niger",
        name_it: "Niger",
        name_en: "Niger",
    },
    Country {
        iso2: "NF",
        iso3: "NFK",
        bfs_code: "8654",
        name_de: "Norfolkinsel",
        name_fr: "Île Norfolk",
        name_it: "Isola Norfolk",
        name_en: "Norfolk Island",
    },
    Country {
        iso2: "NG",
        iso3: "NGA",
        bfs_code: "8336",
        name_de: "Nigeria",
        name_fr: "Nigéria",
        name_it: "Nigeria",
        name_en: "Nigeria",
    },
    Country {
        iso2: "NI",
        iso3: "NIC",
        bfs_code: "8429",
        name_de: "Nicaragua",
        name_fr: "Nicaragua",
        name_it: "Nicaragua",
        name_en: "Nicaragua",
    },
    Country {
        iso2: "NL",
        iso3: "NLD",
        bfs_code: "8227",
        name_de: "Niederlande",
        name_fr: "Pays-Bas",
        name_it: "Paesi Bassi",
        name_en: "Netherlands",
    },
    Country {
        iso2: "NO",
        iso3: "NOR",
        bfs_code: "8228",
        name_de: "Norwegen",
        name_fr: "Norvège",
        name_it: "Norvegia",
        name_en: "Norway",
    },
    Country {
        iso2: "NP",
        iso3: "NPL",
        bfs_code: "8529",
        name_de: "Nepal",
        name_fr: "Népal",
        name_it: "Nepal",
        name_en: "Nepal",
    },
    Country {
        iso2: "NR",
        iso3: "NRU",
        bfs_code: "8604",
        name_de: "Nauru",
        name_fr: "Nauru",
        name_it: "Nauru",
        name_en: "Nauru",
    },
    Country {
        iso2: "NU",
        iso3: "NIU",
        bfs_code: "8683",
        name_de: "Niue",
        name_fr: "Nioué",
        name_it: "Niue",
        name_en: "Niue",
    },
    Country {
        iso2: "NZ",
        iso3: "NZL",
        bfs_code: "8607",
        name_de: "Neuseeland",
        name_fr: "Nouvelle-Zélande",
        name_it: "Nuova Zelanda",
        name_en: "New Zealand",
    },
    Country {
        iso2: "OM",
        iso3: "OMN",
        bfs_code: "8527",
        name_de: "Oman",
        name_fr: "Oman",
        name_it: "Oman",
        name_en: "Oman",
    },
    Country {
        iso2: "PA",
        iso3: "PAN",
        bfs_code: "8430",
        name_de: "Panama",
        name_fr: "Panama",
        name_it: "Panama",
        name_en: "Panama",
    },
    Country {
        iso2: "PE",
        iso3: "PER",
        bfs_code: "8432",
        name_de: "Peru",
        name_fr: "Pérou",
        name_it: "Perù",
        name_en: "Peru",
    },
    Country {
        iso2: "PF",
        iso3: "PYF",
        bfs_code: "8671",
        name_de: "Französisch-Polynesien",
        name_fr: "Polynésie française",
        name_it: "Polinesia francese",
        name_en: "French Polynesia",
    },
    Country {
        iso2: "PG",
        iso3: "PNG",
        bfs_code: "8608",
        name_de: "Papua-Neuguinea",
        name_fr: "Papouasie-Nouvelle-Guinée",
        name_it: "Papua Nuova Guinea",
        name_en: "Papua New Guinea",
    },
    Country {
        iso2: "PH",
        iso3: "PHL",
        bfs_code: "8534",
        name_de: "Philippinen",
        name_fr: "Philippines",
        name_it: "Filippine",
        name_en: "Philippines",
    },
    Country {
        iso2: "PK",
        iso3: "PAK",
        bfs_code: "8533",
        name_de: "Pakistan",
        name_fr: "Pakistan",
        name_it: "Pakistan",
        name_en: "Pakistan",
    },
    Country {
        iso2: "PL",
        iso3: "POL",
        bfs_code: "8230",
        name_de: "Polen",
        name_fr: "Pologne",
        name_it: "Polonia",
        name_en: "Poland",
    },
    Country {
        iso2: "PM",
        iso3: "SPM",
        bfs_code: "8434",
        name_de: "St. Pierre und Miquelon",
        name_fr: "Saint-Pierre-et-Miquelon",
        name_it: "Saint-Pierre e Miquelon",
        name_en: "Saint Pierre and Miquelon",
    },
    Country {
        iso2: "PN",
        iso3: "PCN",
        bfs_code: "8685",
        name_de: "Pitcairninseln",
        name_fr: "Îles Pitcairn",
        name_it: "Isole Pitcairn",
        name_en: "Pitcairn Islands",
    },
    Country {
        iso2: "PR",
        iso3: "PRI",
        bfs_code: "8433",
        name_de: "Puerto Rico",
        name_fr: "Porto Rico",
        name_it: "Portorico",
        name_en: "Puerto Rico",
    },
    Country {
        iso2: "PS",
        iso3: "PSE",
        bfs_code: "8550",
        name_de: "Palästina",
        name_fr: "Palestine",
        name_it: "Palestina",
        name_en: "Palestine",
    },
    Country {
        iso2: "PT",
        iso3: "PRT",
        bfs_code: "8231",
        name_de: "Portugal",
        name_fr: "Portugal",
        name_it: "Portogallo",
        name_en: "Portugal",
    },
    Country {
        iso2: "PW",
        iso3: "PLW",
        bfs_code: "8619",
        name_de: "Palau",
        name_fr: "Palaos",
        name_it: "Palau",
        name_en: "Palau",
    },
    Country {
        iso2: "PY",
        iso3: "PRY",
        bfs_code: "8431",
        name_de: "Paraguay",
        name_fr: "Paraguay",
        name_it: "Paraguay",
        name_en: "Paraguay",
    },
    Country {
        iso2: "QA",
        iso3: "QAT",
        bfs_code: "8519",
        name_de: "Katar",
        name_fr: "Qatar",
        name_it: "Qatar",
        name_en: "Qatar",
    },
    Country {
        iso2: "RE",
        iso3: "REU",
        bfs_code: "8339",
        name_de: "Reunion",
        name_fr: "Réunion",
        name_it: "Riunione",
        name_en: "Réunion",
    },
    Country {
        iso2: "RO",
        iso3: "ROU",
        bfs_code: "8232",
        name_de: "Rumänien",
        name_fr: "Roumanie",
        name_it: "Romania",
        name_en: "Romania",
    },
    Country {
        iso2: "RS",
        iso3: "SRB",
        bfs_code: "8248",
        name_de: "Serbien",
        name_fr: "Serbie",
        name_it: "Serbia",
        name_en: "Serbia",
    },
    Country {
        iso2: "RU",
        iso3: "RUS",
        bfs_code: "8264",
        name_de: "Russland",
        name_fr: "Russie",
        name_it: "Russia",
        name_en: "Russia",
    },
    Country {
        iso2: "RW",
        iso3: "RWA",
        bfs_code: "8341",
        name_de: "Ruanda",
        name_fr: "Rwanda",
        name_it: "Ruanda",
        name_en: "Rwanda",
    },
    Country {
        iso2: "SA",
        iso3: "SAU",
        bfs_code: "8535",
        name_de: "Saudi-Arabien",
        name_fr: "Arabie saoudite",
        name_it: "Arabia Saudita",
        name_en: "Saudi Arabia",
    },
    Country {
        iso2: "SB",
        iso3: "SLB",
        bfs_code: "8614",
        name_de: "Salomoninseln",
        name_fr: "Îles Salomon",
        name_it: "Isole Salomone",
        name_en: "Solomon Islands",
    },
    Country {
        iso2: "SC",
        iso3: "SYC",
        bfs_code: "8346",
        name_de: "Seychellen",
        name_fr: "Seychelles",
        name_it: "Seicelle",
        name_en: "Seychelles",
    },
    Country {
        iso2: "SD",
        iso3: "SDN",
        bfs_code: "8350",
        name_de: "Sudan",
        name_fr: "Soudan",
        name_it: "Sudan",
        name_en: "Sudan",
    },
    Country {
        iso2: "SE",
        iso3: "SWE",
        bfs_code: "8234",
        name_de: "Schweden",
        name_fr: "Suède",
        name_it: "Svezia",
        name_en: "Sweden",
    },
    Country {
        iso2: "SG",
        iso3: "SGP",
        bfs_code: "8537",
        name_de: "Singapur",
        name_fr: "Singapour",
        name_it: "Singapore",
        name_en: "Singapore",
    },
    Country {
        iso2: "SH",
        iso3: "SHN",
        bfs_code: "8375",
        name_de: "Tristan da Cunha",
        name_fr: "Tristan da Cunha",
        name_it: "Tristan da Cunha",
        name_en: "Tristan da Cunha",
    },
    Country {
        iso2: "SI",
        iso3: "SVN",
        bfs_code: "8251",
        name_de: "Slowenien",
        name_fr: "Slovénie",
        name_it: "Slovenia",
        name_en: "Slovenia",
    },
    Country {
        iso2: "SJ",
        iso3: "SJM",
        bfs_code: "8273",
        name_de: "Svalbard und Jan Mayen",
        name_fr: "Svalbard et Île Jan Mayen",
        name_it: "Svalbard e Jan Mayen",
        name_en: "Svalbard and Jan Mayen",
    },
    Country {
        iso2: "SK",
        iso3: "SVK",
        bfs_code: "8243",
        name_de: "Slowakei",
        name_fr: "Slovaquie",
        name_it: "Slovacchia",
        name_en: "Slovakia",
    },
    Country {
        iso2: "SL",
        iso3: "SLE",
        bfs_code: "8347",
        name_de: "Sierra Leone",
        name_fr: "Sierra Leone",
        name_it: "Sierra Leone",
        name_en: "Sierra Leone",
    },
    Country {
        iso2: "SM",
        iso3: "SMR",
        bfs_code: "8233",
        name_de: "San Marino",
        name_fr: "Saint-Marin",
        name_it: "San Marino",
        name_en: "San Marino",
    },
    Country {
        iso2: "SN",
        iso3: "SEN",
        bfs_code: "8345",
        name_de: "Senegal",
        name_fr: "Sénégal",
        name_it: "Senegal",
        name_en: "Senegal",
    },
    Country {
        iso2: "SO",
        iso3: "SOM",
        bfs_code: "8348",
        name_de: "Somalia",
        name_fr: "Somalie",
        name_it: "Somalia",
        name_en: "Somalia",
    },
    Country {
        iso2: "SR",
        iso3: "SUR",
        bfs_code: "8435",
        name_de: "Suriname",
        name_fr: "Suriname",
        name_it: "Suriname",
        name_en: "Suriname",
    },
    Country {
        iso2: "SS",
        iso3: "SSD",
        bfs_code: "8363",
        name_de: "Südsudan",
        name_fr: "Soudan du Sud",
        name_it: "Sudan del Sud",
        name_en: "South Sudan",
    },
    Country {
        iso2: "ST",
        iso3: "STP",
        bfs_code: "8344",
        name_de: "São Tomé und Príncipe",
        name_fr: "Sao Tomé-et-Principe",
        name_it: "São Tomé e Príncipe",
        name_en: "São Tomé and Príncipe",
    },
    Country {
        iso2: "SV",
        iso3: "SLV",
        bfs_code: "8411",
        name_de: "El Salvador",
        name_fr: "El Salvador",
        name_it: "El Salvador",
        name_en: "El Salvador",
    },
    Country {
        iso2: "SX",
        iso3: "SXM",
        bfs_code: "8485",
        name_de: "Sint Maarten (Niederlande)",
        name_fr: "Sint Maarten (Pays-Bas)",
        name_it: "Sint Maarten (Paesi Bassi)",
        name_en: "Sint Maarten (Netherlands)",
    },
    Country {
        iso2: "SY",
        iso3: "SYR",
        bfs_code: "8541",
        name_de: "Syrien",
        name_fr: "Syrie",
        name_it: "Siria",
        name_en: "Syria",
    },
    Country {
        iso2: "SZ",
        iso3: "SWZ",
        bfs_code: "8352",
        name_de: "Swasiland",
        name_fr: "Swaziland",
        name_it: "Swaziland",
        name_en: "Swaziland",
    },
    Country {
        iso2: "TC",
        iso3: "TCA",
        bfs_code: "8474",
        name_de: "Turks- und Caicosinseln",
        name_fr: "Îles Turques et Caïques",
        name_it: "Isole Turks e Caicos",
        name_en: "Turks and Caicos Islands",
    },
    Country {
        iso2: "TD",
        iso3: "TCD",
        bfs_code: "8356",
        name_de: "Tschad",
        name_fr: "Tchad",
        name_it: "Ciad",
        name_en: "Chad",
    },
    Country {
        iso2: "TF",
        iso3: "ATF",
        bfs_code: "8703",
        name_de: "Französische Süd- und Antarktisgebiete",
        name_fr: "Terres australes et antarctiques françaises",
        name_it: "Territori delle terre australi e antartiche francesi",
        name_en: "French Southern and Antarctic Lands",
    },
    Country {
        iso2: "TG",
        iso3: "TGO",
        bfs_code: "8354",
        name_de: "Togo",
        name_fr: "Togo",
        name_it: "Togo",
        name_en: "Togo",
    },
    Country {
        iso2: "TH",
        iso3: "THA",
        bfs_code: "8542",
        name_de: "Thailand",
        name_fr: "Thaïlande",
        name_it: "Thailandia",
        name_en: "Thailand",
    },
    Country {
        iso2: "TJ",
        iso3: "TJK",
        bfs_code: "8565",
        name_de: "Tadschikistan",
        name_fr: "Tadjikistan",
        name_it: "Tagikistan",
        name_en: "Tajikistan",
    },
    Country {
        iso2: "TK",
        iso3: "TKL",
        bfs_code: "8684",
        name_de: "Tokelau",
        name_fr: "Tokélau",
        name_it: "Tokelau",
        name_en: "Tokelau",
    },
    Country {
        iso2: "TL",
        iso3: "TLS",
        bfs_code: "8547",
        name_de: "Timor-Leste",
        name_fr: "Timor-Leste",
        name_it: "Timor-Leste",
        name_en: "Timor-Leste",
    },
    Country {
        iso2: "TM",
        iso3: "TKM",
        bfs_code: "8566",
        name_de: "Turkmenistan",
        name_fr: "Turkménistan",
        name_it: "Turkmenistan",
        name_en: "Turkmenistan",
    },
    Country {
        iso2: "TN",
        iso3: "TUN",
        bfs_code: "8357",
        name_de: "Tunesien",
        name_fr: "Tunisie",
        name_it: "Tunisia",
        name_en: "Tunisia",
    },
    Country {
        iso2: "TO",
        iso3: "TON",
        bfs_code: "8610",
        name_de: "Tonga",
        name_fr: "Tonga",
        name_it: "Tonga",
        name_en: "Tonga",
    },
    Country {
        iso2: "TR",
        iso3: "TUR",
        bfs_code: "8239",
        name_de: "Türkei",
        name_fr: "Turquie",
        name_it: "Turchia",
        name_en: "Turkey",
    },
    Country {
        iso2: "TT",
        iso3: "TTO",
        bfs_code: "8436",
        name_de: "Trinidad und Tobago",
        name_fr: "Trinité-et-Tobago",
        name_it: "Trinidad e Tobago",
        name_en: "Trinidad and Tobago",
    },
    Country {
        iso2: "TV",
        iso3: "TUV",
        bfs_code: "8615",
        name_de: "Tuvalu",
        name_fr: "Tuvalu",
        name_it: "Tuvalu",
        name_en: "Tuvalu",
    },
    Country {
        iso2: "TW",
        iso3: "TWN",
        bfs_code: "8507",
        name_de: "Taiwan (Chinesisches Taipei)",
        name_fr: "Taïwan (Taipei chinois)",
        name_it: "Taiwan (Taipei cinese)",
        name_en: "Taiwan (Chinese Taipei)",
    },
    Country {
        iso2: "TZ",
        iso3: "TZA",
        bfs_code: "8353",
        name_de: "Tansania",
        name_fr: "Tanzanie",
        name_it: "Tanzania",
        name_en: "Tanzania",
    },
    Country {
        iso2: "UA",
        iso3: "UKR",
        bfs_code: "8265",
        name_de: "Ukraine",
        name_fr: "Ukraine",
        name_it: "Ucraina",
        name_en: "Ukraine",
    },
    Country {
        iso2: "UG",
        iso3: "UGA",
        bfs_code: "8358",
        name_de: "Uganda",
        name_fr: "Ouganda",
        name_it: "Uganda",
        name_en: "Uganda",
    },
    Country {
        iso2: "UM",
        iso3: "UMI",
        bfs_code: "8636",
        name_de: "Wakeinsel",
        name_fr: "Île Wake",
        name_it: "Isola Wake",
        name_en: "Wake Island",
    },
    Country {
        iso2: "US",
        iso3: "USA",
        bfs_code: "8439",
        name_de: "Vereinigte Staaten",
        name_fr: "États-Unis",
        name_it: "Stati Uniti",
        name_en: "United States",
    },
    Country {
        iso2: "UY",
        iso3: "URY",
        bfs_code: "8437",
        name_de: "Uruguay",
        name_fr: "Uruguay",
        name_it: "Uruguay",
        name_en: "Uruguay",
    },
    Country {
        iso2: "UZ",
        iso3: "UZB",
        bfs_code: "8567",
        name_de: "Usbekistan",
        name_fr: "Ouzbékistan",
        name_it: "Uzbekistan",
        name_en: "Uzbekistan",
    },
    Country {
        iso2: "VA",
        iso3: "VAT",
        bfs_code: "8241",
        name_de: "Vatikanstadt",
        name_fr: "Cité du Vatican",
        name_it: "Città del Vaticano",
        name_en: "Vatican City",
    },
    Country {
        iso2: "VC",
        iso3: "VCT",
        bfs_code: "8444",
        name_de: "St. Vincent und die Grenadinen",
        name_fr: "Saint-Vincent-et-les Grenadines",
        name_it: "Saint Vincent e Grenadine",
        name_en: "Saint Vincent and the Grenadines",
    },
    Country {
        iso2: "VE",
        iso3: "VEN",
        bfs_code: "8438",
        name_de: "Venezuela",
        name_fr: "Venezuela",
        name_it: "Venezuela",
        name_en: "Venezuela",
    },
    Country {
        iso2: "VG",
        iso3: "VGB",
        bfs_code: "8476",
        name_de: "Jungferninseln (UK)",
        name_fr: "Îles Vierges britanniques",
        name_it: "Isole Vergini britanniche",
        name_en: "British Virgin Islands",
    },
    Country {
        iso2: "VI",
        iso3: "VIR",
        bfs_code: "8472",
        name_de: "Jungferninseln (USA)",
        name_fr: "Îles Vierges américaines",
        name_it: "Isole Vergini americane",
        name_en: "US Virgin Islands",
    },
    Country {
        iso2: "VN",
        iso3: "VNM",
        bfs_code: "8545",
        name_de: "Vietnam",
        name_fr: "Vietnam",
        name_it: "Vietnam",
        name_en: "Vietnam",
    },
    Country {
        iso2: "VU",
        iso3: "VUT",
        bfs_code: "8605",
        name_de: "Vanuatu",
        name_fr: "Vanuatu",
        name_it: "Vanuatu",
        name_en: "Vanuatu",
    },
    Country {
        iso2: "WF",
        iso3: "WLF",
        bfs_code: "8611",
        name_de: "Wallis und Futuna",
        name_fr: "Wallis-et-Futuna",
        name_it: "Wallis e Futuna",
        name_en: "Wallis and Futuna",
    },
    Country {
        iso2: "WS",
        iso3: "WSM",
        bfs_code: "8612",
        name_de: "Samoa",
        name_fr: "Samoa",
        name_it: "Samoa",
        name_en: "Samoa",
    },
    Country {
        iso2: "YE",
        iso3: "YEM",
        bfs_code: "8516",
        name_de: "Jemen",
        name_fr: "Yémen",
        name_it: "Yemen",
        name_en: "Yemen",
    },
    Country {
        iso2: "YT",
        iso3: "MYT",
        bfs_code: "8361",
        name_de: "Mayotte",
        name_fr: "Mayotte",
        name_it: "Mayotte",
        name_en: "Mayotte",
    },
    Country {
        iso2: "ZA",
        iso3: "ZAF",
        bfs_code: "8349",
        name_de: "Südafrika",
        name_fr: "Afrique du Sud",
        name_it: "Sudafrica",
        name_en: "South Africa",
    },
    Country {
        iso2: "ZM",
        iso3: "ZMB",
        bfs_code: "8343",
        name_de: "Sambia",
        name_fr: "Zambie",
        name_it: "Zambia",
        name_en: "Zambia",
    },
    Country {
        iso2: "ZW",
        iso3: "ZWE",
        bfs_code: "8340",
        name_de: "Simbabwe",
        name_fr: "Zimbabwe",
        name_it: "Zimbabwe",
        name_en: "Zimbabwe",
    },
];
