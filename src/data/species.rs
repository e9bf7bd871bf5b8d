use super::types::PokemonType::{self, *};

pub struct SpeciesInfo {
    pub name: &'static str,
    pub types: &'static [PokemonType],
}

const fn sp(name: &'static str, types: &'static [PokemonType]) -> SpeciesInfo {
    SpeciesInfo { name, types }
}

pub(super) static SPECIES: [SpeciesInfo; 493] = [
    sp("Bulbasaur", &[Grass, Poison]),
    sp("Ivysaur", &[Grass, Poison]),
    sp("Venusaur", &[Grass, Poison]),
    sp("Charmander", &[Fire]),
    sp("Charmeleon", &[Fire]),
    sp("Charizard", &[Fire, Flying]),
    sp("Squirtle", &[Water]),
    sp("Wartortle", &[Water]),
    sp("Blastoise", &[Water]),
    sp("Caterpie", &[Bug]),
    sp("Metapod", &[Bug]),
    sp("Butterfree", &[Bug, Flying]),
    sp("Weedle", &[Bug, Poison]),
    sp("Kakuna", &[Bug, Poison]),
    sp("Beedrill", &[Bug, Poison]),
    sp("Pidgey", &[Normal, Flying]),
    sp("Pidgeotto", &[Normal, Flying]),
    sp("Pidgeot", &[Normal, Flying]),
    sp("Rattata", &[Normal]),
    sp("Raticate", &[Normal]),
    sp("Spearow", &[Normal, Flying]),
    sp("Fearow", &[Normal, Flying]),
    sp("Ekans", &[Poison]),
    sp("Arbok", &[Poison]),
    sp("Pikachu", &[Electric]),
    sp("Raichu", &[Electric]),
    sp("Sandshrew", &[Ground]),
    sp("Sandslash", &[Ground]),
    sp("Nidoran♀", &[Poison]),
    sp("Nidorina", &[Poison]),
    sp("Nidoqueen", &[Poison, Ground]),
    sp("Nidoran♂", &[Poison]),
    sp("Nidorino", &[Poison]),
    sp("Nidoking", &[Poison, Ground]),
    sp("Clefairy", &[Normal]),
    sp("Clefable", &[Normal]),
    sp("Vulpix", &[Fire]),
    sp("Ninetales", &[Fire]),
    sp("Jigglypuff", &[Normal]),
    sp("Wigglytuff", &[Normal]),
    sp("Zubat", &[Poison, Flying]),
    sp("Golbat", &[Poison, Flying]),
    sp("Oddish", &[Grass, Poison]),
    sp("Gloom", &[Grass, Poison]),
    sp("Vileplume", &[Grass, Poison]),
    sp("Paras", &[Bug, Grass]),
    sp("Parasect", &[Bug, Grass]),
    sp("Venonat", &[Bug, Poison]),
    sp("Venomoth", &[Bug, Poison]),
    sp("Diglett", &[Ground]),
    sp("Dugtrio", &[Ground]),
    sp("Meowth", &[Normal]),
    sp("Persian", &[Normal]),
    sp("Psyduck", &[Water]),
    sp("Golduck", &[Water]),
    sp("Mankey", &[Fighting]),
    sp("Primeape", &[Fighting]),
    sp("Growlithe", &[Fire]),
    sp("Arcanine", &[Fire]),
    sp("Poliwag", &[Water]),
    sp("Poliwhirl", &[Water]),
    sp("Poliwrath", &[Water, Fighting]),
    sp("Abra", &[Psychic]),
    sp("Kadabra", &[Psychic]),
    sp("Alakazam", &[Psychic]),
    sp("Machop", &[Fighting]),
    sp("Machoke", &[Fighting]),
    sp("Machamp", &[Fighting]),
    sp("Bellsprout", &[Grass, Poison]),
    sp("Weepinbell", &[Grass, Poison]),
    sp("Victreebel", &[Grass, Poison]),
    sp("Tentacool", &[Water, Poison]),
    sp("Tentacruel", &[Water, Poison]),
    sp("Geodude", &[Rock, Ground]),
    sp("Graveler", &[Rock, Ground]),
    sp("Golem", &[Rock, Ground]),
    sp("Ponyta", &[Fire]),
    sp("Rapidash", &[Fire]),
    sp("Slowpoke", &[Water, Psychic]),
    sp("Slowbro", &[Water, Psychic]),
    sp("Magnemite", &[Electric, Steel]),
    sp("Magneton", &[Electric, Steel]),
    sp("Farfetch'd", &[Normal, Flying]),
    sp("Doduo", &[Normal, Flying]),
    sp("Dodrio", &[Normal, Flying]),
    sp("Seel", &[Water]),
    sp("Dewgong", &[Water, Ice]),
    sp("Grimer", &[Poison]),
    sp("Muk", &[Poison]),
    sp("Shellder", &[Water]),
    sp("Cloyster", &[Water, Ice]),
    sp("Gastly", &[Ghost, Poison]),
    sp("Haunter", &[Ghost, Poison]),
    sp("Gengar", &[Ghost, Poison]),
    sp("Onix", &[Rock, Ground]),
    sp("Drowzee", &[Psychic]),
    sp("Hypno", &[Psychic]),
    sp("Krabby", &[Water]),
    sp("Kingler", &[Water]),
    sp("Voltorb", &[Electric]),
    sp("Electrode", &[Electric]),
    sp("Exeggcute", &[Grass, Psychic]),
    sp("Exeggutor", &[Grass, Psychic]),
    sp("Cubone", &[Ground]),
    sp("Marowak", &[Ground]),
    sp("Hitmonlee", &[Fighting]),
    sp("Hitmonchan", &[Fighting]),
    sp("Lickitung", &[Normal]),
    sp("Koffing", &[Poison]),
    sp("Weezing", &[Poison]),
    sp("Rhyhorn", &[Ground, Rock]),
    sp("Rhydon", &[Ground, Rock]),
    sp("Chansey", &[Normal]),
    sp("Tangela", &[Grass]),
    sp("Kangaskhan", &[Normal]),
    sp("Horsea", &[Water]),
    sp("Seadra", &[Water]),
    sp("Goldeen", &[Water]),
    sp("Seaking", &[Water]),
    sp("Staryu", &[Water]),
    sp("Starmie", &[Water, Psychic]),
    sp("Mr. Mime", &[Psychic]),
    sp("Scyther", &[Bug, Flying]),
    sp("Jynx", &[Ice, Psychic]),
    sp("Electabuzz", &[Electric]),
    sp("Magmar", &[Fire]),
    sp("Pinsir", &[Bug]),
    sp("Tauros", &[Normal]),
    sp("Magikarp", &[Water]),
    sp("Gyarados", &[Water, Flying]),
    sp("Lapras", &[Water, Ice]),
    sp("Ditto", &[Normal]),
    sp("Eevee", &[Normal]),
    sp("Vaporeon", &[Water]),
    sp("Jolteon", &[Electric]),
    sp("Flareon", &[Fire]),
    sp("Porygon", &[Normal]),
    sp("Omanyte", &[Rock, Water]),
    sp("Omastar", &[Rock, Water]),
    sp("Kabuto", &[Rock, Water]),
    sp("Kabutops", &[Rock, Water]),
    sp("Aerodactyl", &[Rock, Flying]),
    sp("Snorlax", &[Normal]),
    sp("Articuno", &[Ice, Flying]),
    sp("Zapdos", &[Electric, Flying]),
    sp("Moltres", &[Fire, Flying]),
    sp("Dratini", &[Dragon]),
    sp("Dragonair", &[Dragon]),
    sp("Dragonite", &[Dragon, Flying]),
    sp("Mewtwo", &[Psychic]),
    sp("Mew", &[Psychic]),
    sp("Chikorita", &[Grass]),
    sp("Bayleef", &[Grass]),
    sp("Meganium", &[Grass]),
    sp("Cyndaquil", &[Fire]),
    sp("Quilava", &[Fire]),
    sp("Typhlosion", &[Fire]),
    sp("Totodile", &[Water]),
    sp("Croconaw", &[Water]),
    sp("Feraligatr", &[Water]),
    sp("Sentret", &[Normal]),
    sp("Furret", &[Normal]),
    sp("Hoothoot", &[Normal, Flying]),
    sp("Noctowl", &[Normal, Flying]),
    sp("Ledyba", &[Bug, Flying]),
    sp("Ledian", &[Bug, Flying]),
    sp("Spinarak", &[Bug, Poison]),
    sp("Ariados", &[Bug, Poison]),
    sp("Crobat", &[Poison, Flying]),
    sp("Chinchou", &[Water, Electric]),
    sp("Lanturn", &[Water, Electric]),
    sp("Pichu", &[Electric]),
    sp("Cleffa", &[Normal]),
    sp("Igglybuff", &[Normal]),
    sp("Togepi", &[Normal]),
    sp("Togetic", &[Normal, Flying]),
    sp("Natu", &[Psychic, Flying]),
    sp("Xatu", &[Psychic, Flying]),
    sp("Mareep", &[Electric]),
    sp("Flaaffy", &[Electric]),
    sp("Ampharos", &[Electric]),
    sp("Bellossom", &[Grass]),
    sp("Marill", &[Water]),
    sp("Azumarill", &[Water]),
    sp("Sudowoodo", &[Rock]),
    sp("Politoed", &[Water]),
    sp("Hoppip", &[Grass, Flying]),
    sp("Skiploom", &[Grass, Flying]),
    sp("Jumpluff", &[Grass, Flying]),
    sp("Aipom", &[Normal]),
    sp("Sunkern", &[Grass]),
    sp("Sunflora", &[Grass]),
    sp("Yanma", &[Bug, Flying]),
    sp("Wooper", &[Water, Ground]),
    sp("Quagsire", &[Water, Ground]),
    sp("Espeon", &[Psychic]),
    sp("Umbreon", &[Dark]),
    sp("Murkrow", &[Dark, Flying]),
    sp("Slowking", &[Water, Psychic]),
    sp("Misdreavus", &[Ghost]),
    sp("Unown", &[Psychic]),
    sp("Wobbuffet", &[Psychic]),
    sp("Girafarig", &[Normal, Psychic]),
    sp("Pineco", &[Bug]),
    sp("Forretress", &[Bug, Steel]),
    sp("Dunsparce", &[Normal]),
    sp("Gligar", &[Ground, Flying]),
    sp("Steelix", &[Steel, Ground]),
    sp("Snubbull", &[Normal]),
    sp("Granbull", &[Normal]),
    sp("Qwilfish", &[Water, Poison]),
    sp("Scizor", &[Bug, Steel]),
    sp("Shuckle", &[Bug, Rock]),
    sp("Heracross", &[Bug, Fighting]),
    sp("Sneasel", &[Dark, Ice]),
    sp("Teddiursa", &[Normal]),
    sp("Ursaring", &[Normal]),
    sp("Slugma", &[Fire]),
    sp("Magcargo", &[Fire, Rock]),
    sp("Swinub", &[Ice, Ground]),
    sp("Piloswine", &[Ice, Ground]),
    sp("Corsola", &[Water, Rock]),
    sp("Remoraid", &[Water]),
    sp("Octillery", &[Water]),
    sp("Delibird", &[Ice, Flying]),
    sp("Mantine", &[Water, Flying]),
    sp("Skarmory", &[Steel, Flying]),
    sp("Houndour", &[Dark, Fire]),
    sp("Houndoom", &[Dark, Fire]),
    sp("Kingdra", &[Water, Dragon]),
    sp("Phanpy", &[Ground]),
    sp("Donphan", &[Ground]),
    sp("Porygon2", &[Normal]),
    sp("Stantler", &[Normal]),
    sp("Smeargle", &[Normal]),
    sp("Tyrogue", &[Fighting]),
    sp("Hitmontop", &[Fighting]),
    sp("Smoochum", &[Ice, Psychic]),
    sp("Elekid", &[Electric]),
    sp("Magby", &[Fire]),
    sp("Miltank", &[Normal]),
    sp("Blissey", &[Normal]),
    sp("Raikou", &[Electric]),
    sp("Entei", &[Fire]),
    sp("Suicune", &[Water]),
    sp("Larvitar", &[Rock, Ground]),
    sp("Pupitar", &[Rock, Ground]),
    sp("Tyranitar", &[Rock, Dark]),
    sp("Lugia", &[Psychic, Flying]),
    sp("Ho-Oh", &[Fire, Flying]),
    sp("Celebi", &[Psychic, Grass]),
    sp("Treecko", &[Grass]),
    sp("Grovyle", &[Grass]),
    sp("Sceptile", &[Grass]),
    sp("Torchic", &[Fire]),
    sp("Combusken", &[Fire, Fighting]),
    sp("Blaziken", &[Fire, Fighting]),
    sp("Mudkip", &[Water]),
    sp("Marshtomp", &[Water, Ground]),
    sp("Swampert", &[Water, Ground]),
    sp("Poochyena", &[Dark]),
    sp("Mightyena", &[Dark]),
    sp("Zigzagoon", &[Normal]),
    sp("Linoone", &[Normal]),
    sp("Wurmple", &[Bug]),
    sp("Silcoon", &[Bug]),
    sp("Beautifly", &[Bug, Flying]),
    sp("Cascoon", &[Bug]),
    sp("Dustox", &[Bug, Poison]),
    sp("Lotad", &[Water, Grass]),
    sp("Lombre", &[Water, Grass]),
    sp("Ludicolo", &[Water, Grass]),
    sp("Seedot", &[Grass]),
    sp("Nuzleaf", &[Grass, Dark]),
    sp("Shiftry", &[Grass, Dark]),
    sp("Taillow", &[Normal, Flying]),
    sp("Swellow", &[Normal, Flying]),
    sp("Wingull", &[Water, Flying]),
    sp("Pelipper", &[Water, Flying]),
    sp("Ralts", &[Psychic]),
    sp("Kirlia", &[Psychic]),
    sp("Gardevoir", &[Psychic]),
    sp("Surskit", &[Bug, Water]),
    sp("Masquerain", &[Bug, Flying]),
    sp("Shroomish", &[Grass]),
    sp("Breloom", &[Grass, Fighting]),
    sp("Slakoth", &[Normal]),
    sp("Vigoroth", &[Normal]),
    sp("Slaking", &[Normal]),
    sp("Nincada", &[Bug, Ground]),
    sp("Ninjask", &[Bug, Flying]),
    sp("Shedinja", &[Bug, Ghost]),
    sp("Whismur", &[Normal]),
    sp("Loudred", &[Normal]),
    sp("Exploud", &[Normal]),
    sp("Makuhita", &[Fighting]),
    sp("Hariyama", &[Fighting]),
    sp("Azurill", &[Normal]),
    sp("Nosepass", &[Rock]),
    sp("Skitty", &[Normal]),
    sp("Delcatty", &[Normal]),
    sp("Sableye", &[Dark, Ghost]),
    sp("Mawile", &[Steel]),
    sp("Aron", &[Steel, Rock]),
    sp("Lairon", &[Steel, Rock]),
    sp("Aggron", &[Steel, Rock]),
    sp("Meditite", &[Fighting, Psychic]),
    sp("Medicham", &[Fighting, Psychic]),
    sp("Electrike", &[Electric]),
    sp("Manectric", &[Electric]),
    sp("Plusle", &[Electric]),
    sp("Minun", &[Electric]),
    sp("Volbeat", &[Bug]),
    sp("Illumise", &[Bug]),
    sp("Roselia", &[Grass, Poison]),
    sp("Gulpin", &[Poison]),
    sp("Swalot", &[Poison]),
    sp("Carvanha", &[Water, Dark]),
    sp("Sharpedo", &[Water, Dark]),
    sp("Wailmer", &[Water]),
    sp("Wailord", &[Water]),
    sp("Numel", &[Fire, Ground]),
    sp("Camerupt", &[Fire, Ground]),
    sp("Torkoal", &[Fire]),
    sp("Spoink", &[Psychic]),
    sp("Grumpig", &[Psychic]),
    sp("Spinda", &[Normal]),
    sp("Trapinch", &[Ground]),
    sp("Vibrava", &[Ground, Dragon]),
    sp("Flygon", &[Ground, Dragon]),
    sp("Cacnea", &[Grass]),
    sp("Cacturne", &[Grass, Dark]),
    sp("Swablu", &[Normal, Flying]),
    sp("Altaria", &[Dragon, Flying]),
    sp("Zangoose", &[Normal]),
    sp("Seviper", &[Poison]),
    sp("Lunatone", &[Rock, Psychic]),
    sp("Solrock", &[Rock, Psychic]),
    sp("Barboach", &[Water, Ground]),
    sp("Whiscash", &[Water, Ground]),
    sp("Corphish", &[Water]),
    sp("Crawdaunt", &[Water, Dark]),
    sp("Baltoy", &[Ground, Psychic]),
    sp("Claydol", &[Ground, Psychic]),
    sp("Lileep", &[Rock, Grass]),
    sp("Cradily", &[Rock, Grass]),
    sp("Anorith", &[Rock, Bug]),
    sp("Armaldo", &[Rock, Bug]),
    sp("Feebas", &[Water]),
    sp("Milotic", &[Water]),
    sp("Castform", &[Normal]),
    sp("Kecleon", &[Normal]),
    sp("Shuppet", &[Ghost]),
    sp("Banette", &[Ghost]),
    sp("Duskull", &[Ghost]),
    sp("Dusclops", &[Ghost]),
    sp("Tropius", &[Grass, Flying]),
    sp("Chimecho", &[Psychic]),
    sp("Absol", &[Dark]),
    sp("Wynaut", &[Psychic]),
    sp("Snorunt", &[Ice]),
    sp("Glalie", &[Ice]),
    sp("Spheal", &[Ice, Water]),
    sp("Sealeo", &[Ice, Water]),
    sp("Walrein", &[Ice, Water]),
    sp("Clamperl", &[Water]),
    sp("Huntail", &[Water]),
    sp("Gorebyss", &[Water]),
    sp("Relicanth", &[Water, Rock]),
    sp("Luvdisc", &[Water]),
    sp("Bagon", &[Dragon]),
    sp("Shelgon", &[Dragon]),
    sp("Salamence", &[Dragon, Flying]),
    sp("Beldum", &[Steel, Psychic]),
    sp("Metang", &[Steel, Psychic]),
    sp("Metagross", &[Steel, Psychic]),
    sp("Regirock", &[Rock]),
    sp("Regice", &[Ice]),
    sp("Registeel", &[Steel]),
    sp("Latias", &[Dragon, Psychic]),
    sp("Latios", &[Dragon, Psychic]),
    sp("Kyogre", &[Water]),
    sp("Groudon", &[Ground]),
    sp("Rayquaza", &[Dragon, Flying]),
    sp("Jirachi", &[Steel, Psychic]),
    sp("Deoxys", &[Psychic]),
    sp("Turtwig", &[Grass]),
    sp("Grotle", &[Grass]),
    sp("Torterra", &[Grass, Ground]),
    sp("Chimchar", &[Fire]),
    sp("Monferno", &[Fire, Fighting]),
    sp("Infernape", &[Fire, Fighting]),
    sp("Piplup", &[Water]),
    sp("Prinplup", &[Water]),
    sp("Empoleon", &[Water, Steel]),
    sp("Starly", &[Normal, Flying]),
    sp("Staravia", &[Normal, Flying]),
    sp("Staraptor", &[Normal, Flying]),
    sp("Bidoof", &[Normal]),
    sp("Bibarel", &[Normal, Water]),
    sp("Kricketot", &[Bug]),
    sp("Kricketune", &[Bug]),
    sp("Shinx", &[Electric]),
    sp("Luxio", &[Electric]),
    sp("Luxray", &[Electric]),
    sp("Budew", &[Grass, Poison]),
    sp("Roserade", &[Grass, Poison]),
    sp("Cranidos", &[Rock]),
    sp("Rampardos", &[Rock]),
    sp("Shieldon", &[Rock, Steel]),
    sp("Bastiodon", &[Rock, Steel]),
    sp("Burmy", &[Bug]),
    sp("Wormadam", &[Bug, Grass]),
    sp("Mothim", &[Bug, Flying]),
    sp("Combee", &[Bug, Flying]),
    sp("Vespiquen", &[Bug, Flying]),
    sp("Pachirisu", &[Electric]),
    sp("Buizel", &[Water]),
    sp("Floatzel", &[Water]),
    sp("Cherubi", &[Grass]),
    sp("Cherrim", &[Grass]),
    sp("Shellos", &[Water]),
    sp("Gastrodon", &[Water, Ground]),
    sp("Ambipom", &[Normal]),
    sp("Drifloon", &[Ghost, Flying]),
    sp("Drifblim", &[Ghost, Flying]),
    sp("Buneary", &[Normal]),
    sp("Lopunny", &[Normal]),
    sp("Mismagius", &[Ghost]),
    sp("Honchkrow", &[Dark, Flying]),
    sp("Glameow", &[Normal]),
    sp("Purugly", &[Normal]),
    sp("Chingling", &[Psychic]),
    sp("Stunky", &[Poison, Dark]),
    sp("Skuntank", &[Poison, Dark]),
    sp("Bronzor", &[Steel, Psychic]),
    sp("Bronzong", &[Steel, Psychic]),
    sp("Bonsly", &[Rock]),
    sp("Mime Jr.", &[Psychic]),
    sp("Happiny", &[Normal]),
    sp("Chatot", &[Normal, Flying]),
    sp("Spiritomb", &[Ghost, Dark]),
    sp("Gible", &[Dragon, Ground]),
    sp("Gabite", &[Dragon, Ground]),
    sp("Garchomp", &[Dragon, Ground]),
    sp("Munchlax", &[Normal]),
    sp("Riolu", &[Fighting]),
    sp("Lucario", &[Fighting, Steel]),
    sp("Hippopotas", &[Ground]),
    sp("Hippowdon", &[Ground]),
    sp("Skorupi", &[Poison, Bug]),
    sp("Drapion", &[Poison, Dark]),
    sp("Croagunk", &[Poison, Fighting]),
    sp("Toxicroak", &[Poison, Fighting]),
    sp("Carnivine", &[Grass]),
    sp("Finneon", &[Water]),
    sp("Lumineon", &[Water]),
    sp("Mantyke", &[Water, Flying]),
    sp("Snover", &[Grass, Ice]),
    sp("Abomasnow", &[Grass, Ice]),
    sp("Weavile", &[Dark, Ice]),
    sp("Magnezone", &[Electric, Steel]),
    sp("Lickilicky", &[Normal]),
    sp("Rhyperior", &[Ground, Rock]),
    sp("Tangrowth", &[Grass]),
    sp("Electivire", &[Electric]),
    sp("Magmortar", &[Fire]),
    sp("Togekiss", &[Normal, Flying]),
    sp("Yanmega", &[Bug, Flying]),
    sp("Leafeon", &[Grass]),
    sp("Glaceon", &[Ice]),
    sp("Gliscor", &[Ground, Flying]),
    sp("Mamoswine", &[Ice, Ground]),
    sp("Porygon-Z", &[Normal]),
    sp("Gallade", &[Psychic, Fighting]),
    sp("Probopass", &[Rock, Steel]),
    sp("Dusknoir", &[Ghost]),
    sp("Froslass", &[Ice, Ghost]),
    sp("Rotom", &[Electric, Ghost]),
    sp("Uxie", &[Psychic]),
    sp("Mesprit", &[Psychic]),
    sp("Azelf", &[Psychic]),
    sp("Dialga", &[Steel, Dragon]),
    sp("Palkia", &[Water, Dragon]),
    sp("Heatran", &[Fire, Steel]),
    sp("Regigigas", &[Normal]),
    sp("Giratina", &[Ghost, Dragon]),
    sp("Cresselia", &[Psychic]),
    sp("Phione", &[Water]),
    sp("Manaphy", &[Water]),
    sp("Darkrai", &[Dark]),
    sp("Shaymin", &[Grass]),
    sp("Arceus", &[Normal]),
];

/// National dex numbers for GBA internal indices 277..=411, in internal order.
pub(super) static GEN3_HOENN_BLOCK: [u16; 135] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261, 262, 263,
    264, 265, 266, 267, 268, 269, 270, 271, 272, 273, 274, 275,
    290, 291, 292, 276, 277, 285, 286, 327, 278, 279, 283, 284,
    320, 321, 300, 301, 352, 343, 344, 299, 324, 302, 339, 340,
    370, 341, 342, 349, 350, 318, 319, 328, 329, 330, 296, 297,
    309, 310, 322, 323, 363, 364, 365, 331, 332, 361, 362, 337,
    338, 298, 325, 326, 311, 312, 303, 307, 308, 333, 334, 360,
    355, 356, 315, 287, 288, 289, 316, 317, 357, 293, 294, 295,
    366, 367, 368, 359, 353, 354, 336, 335, 369, 304, 305, 306,
    351, 313, 314, 345, 346, 347, 348, 280, 281, 282, 371, 372,
    373, 374, 375, 376, 377, 378, 379, 382, 383, 384, 380, 381,
    385, 386, 358,
];
