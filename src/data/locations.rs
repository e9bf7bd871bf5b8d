// Empty strings are unused map sections.
pub(super) static GEN3_LOCATIONS: [&str; 256] = [
    "Littleroot Town",
    "Oldale Town",
    "Dewford Town",
    "Lavaridge Town",
    "Fallarbor Town",
    "Verdanturf Town",
    "Pacifidlog Town",
    "Petalburg City",
    "Slateport City",
    "Mauville City",
    "Rustboro City",
    "Fortree City",
    "Lilycove City",
    "Mossdeep City",
    "Sootopolis City",
    "Ever Grande City",
    "Route 101",
    "Route 102",
    "Route 103",
    "Route 104",
    "Route 105",
    "Route 106",
    "Route 107",
    "Route 108",
    "Route 109",
    "Route 110",
    "Route 111",
    "Route 112",
    "Route 113",
    "Route 114",
    "Route 115",
    "Route 116",
    "Route 117",
    "Route 118",
    "Route 119",
    "Route 120",
    "Route 121",
    "Route 122",
    "Route 123",
    "Route 124",
    "Route 125",
    "Route 126",
    "Route 127",
    "Route 128",
    "Route 129",
    "Route 130",
    "Route 131",
    "Route 132",
    "Route 133",
    "Route 134",
    "Underwater",
    "Underwater",
    "Underwater",
    "Underwater",
    "Underwater",
    "Granite Cave",
    "Mt. Chimney",
    "Safari Zone",
    "Battle Frontier",
    "Petalburg Woods",
    "Rusturf Tunnel",
    "Abandoned Ship",
    "New Mauville",
    "Meteor Falls",
    "Meteor Falls",
    "Mt. Pyre",
    "Hideout",
    "Shoal Cave",
    "Seafloor Cavern",
    "Underwater",
    "Victory Road",
    "Mirage Island",
    "Cave of Origin",
    "Southern Island",
    "Fiery Path",
    "Fiery Path",
    "Jagged Pass",
    "Jagged Pass",
    "Sealed Chamber",
    "Underwater",
    "Scorched Slab",
    "Island Cave",
    "Desert Ruins",
    "Ancient Tomb",
    "Inside of Truck",
    "Sky Pillar",
    "Secret Base",
    "Ferry",
    "Pallet Town",
    "Viridian City",
    "Pewter City",
    "Cerulean City",
    "Lavender Town",
    "Vermilion City",
    "Celadon City",
    "Fuchsia City",
    "Cinnabar Island",
    "Indigo Plateau",
    "Saffron City",
    "Route 4",
    "Route 10",
    "Route 1",
    "Route 2",
    "Route 3",
    "Route 4",
    "Route 5",
    "Route 6",
    "Route 7",
    "Route 8",
    "Route 9",
    "Route 10",
    "Route 11",
    "Route 12",
    "Route 13",
    "Route 14",
    "Route 15",
    "Route 16",
    "Route 17",
    "Route 18",
    "Route 19",
    "Route 20",
    "Route 21",
    "Route 22",
    "Route 23",
    "Route 24",
    "Route 25",
    "Viridian Forest",
    "Mt. Moon",
    "S.S. Anne",
    "Underground Path",
    "Underground Path",
    "Diglett's Cave",
    "Victory Road",
    "Rocket Hideout",
    "Silph Co.",
    "Pokémon Mansion",
    "Safari Zone",
    "Pokémon League",
    "Rock Tunnel",
    "Seafoam Islands",
    "Pokémon Tower",
    "Cerulean Cave",
    "Power Plant",
    "One Island",
    "Two Island",
    "Three Island",
    "Four Island",
    "Five Island",
    "Seven Island",
    "Six Island",
    "Kindle Road",
    "Treasure Beach",
    "Cape Brink",
    "Bond Bridge",
    "Three Isle Port",
    "Sevii Isle 6",
    "Sevii Isle 7",
    "Sevii Isle 8",
    "Sevii Isle 9",
    "Resort Gorgeous",
    "Water Labyrinth",
    "Five Isle Meadow",
    "Memorial Pillar",
    "Outcast Island",
    "Green Path",
    "Water Path",
    "Ruin Valley",
    "Trainer Tower",
    "Canyon Entrance",
    "Sevault Canyon",
    "Tanoby Ruins",
    "Sevii Isle 22",
    "Sevii Isle 23",
    "Sevii Isle 24",
    "Navel Rock",
    "Mt. Ember",
    "Berry Forest",
    "Icefall Cave",
    "Rocket Warehouse",
    "Trainer Tower",
    "Dotted Hole",
    "Lost Cave",
    "Pattern Bush",
    "Altering Cave",
    "Tanoby Chambers",
    "Three Isle Path",
    "Tanoby Key",
    "Birth Island",
    "Monean Chamber",
    "Liptoo Chamber",
    "Weepth Chamber",
    "Dilford Chamber",
    "Scufib Chamber",
    "Rixy Chamber",
    "Viapois Chamber",
    "Ember Spa",
    "Special Area",
    "Aqua Hideout",
    "Magma Hideout",
    "Mirage Tower",
    "Birth Island",
    "Faraway Island",
    "Artisan Cave",
    "Marine Cave",
    "Underwater",
    "Terra Cave",
    "Underwater",
    "Underwater",
    "Underwater",
    "Desert Underpass",
    "Altering Cave",
    "Navel Rock",
    "Trainer Hill",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "Gift Egg",
    "In-game Trade",
    "Fateful Encounter",
];

pub(super) static GEN4_LOCATIONS: [&str; 236] = [
    "Mystery Zone",
    "Twinleaf Town",
    "Sandgem Town",
    "Floaroma Town",
    "Solaceon Town",
    "Celestic Town",
    "Jubilife City",
    "Canalave City",
    "Oreburgh City",
    "Eterna City",
    "Hearthome City",
    "Pastoria City",
    "Veilstone City",
    "Sunyshore City",
    "Snowpoint City",
    "Pokémon League",
    "Route 201",
    "Route 202",
    "Route 203",
    "Route 204",
    "Route 205",
    "Route 206",
    "Route 207",
    "Route 208",
    "Route 209",
    "Route 210",
    "Route 211",
    "Route 212",
    "Route 213",
    "Route 214",
    "Route 215",
    "Route 216",
    "Route 217",
    "Route 218",
    "Route 219",
    "Route 220",
    "Route 221",
    "Route 222",
    "Route 223",
    "Route 224",
    "Route 225",
    "Route 226",
    "Route 227",
    "Route 228",
    "Route 229",
    "Route 230",
    "Oreburgh Mine",
    "Valley Windworks",
    "Eterna Forest",
    "Fuego Ironworks",
    "Mt. Coronet",
    "Spear Pillar",
    "Great Marsh",
    "Solaceon Ruins",
    "Victory Road",
    "Pal Park",
    "Amity Square",
    "Ravaged Path",
    "Floaroma Meadow",
    "Oreburgh Gate",
    "Fullmoon Island",
    "Sendoff Spring",
    "Turnback Cave",
    "Flower Paradise",
    "Snowpoint Temple",
    "Wayward Cave",
    "Ruin Maniac Cave",
    "Maniac Tunnel",
    "Trophy Garden",
    "Iron Island",
    "Old Chateau",
    "Galactic HQ",
    "Verity Lakefront",
    "Valor Lakefront",
    "Acuity Lakefront",
    "Spring Path",
    "Lake Verity",
    "Lake Valor",
    "Lake Acuity",
    "Newmoon Island",
    "Battle Area",
    "Fight Area",
    "Survival Area",
    "Resort Area",
    "Stark Mountain",
    "Seabreak Path",
    "Hall of Origin",
    "Verity Cavern",
    "Valor Cavern",
    "Acuity Cavern",
    "Jubilife TV",
    "Pokétch Co.",
    "GTS",
    "Trainers' School",
    "Mining Museum",
    "Flower Shop",
    "Cycle Shop",
    "Contest Hall",
    "Poffin House",
    "Foreign Building",
    "Pokémon Day Care",
    "Veilstone Store",
    "Game Corner",
    "Canalave Library",
    "Vista Lighthouse",
    "Sunyshore Market",
    "Pokémon Mansion",
    "Footstep House",
    "Café",
    "Grand Lake",
    "Restaurant",
    "Battle Park",
    "Battle Frontier",
    "Battle Factory",
    "Battle Castle",
    "Battle Arcade",
    "Battle Hall",
    "Distortion World",
    "Global Terminal",
    "Villa",
    "Battleground",
    "ROTOM's Room",
    "T.G. Eterna Bldg",
    "Iron Ruins",
    "Iceberg Ruins",
    "Rock Peak Ruins",
    "New Bark Town",
    "Cherrygrove City",
    "Violet City",
    "Azalea Town",
    "Cianwood City",
    "Goldenrod City",
    "Olivine City",
    "Ecruteak City",
    "Mahogany Town",
    "Lake of Rage",
    "Blackthorn City",
    "Mt. Silver",
    "Pallet Town",
    "Viridian City",
    "Pewter City",
    "Cerulean City",
    "Lavender Town",
    "Vermilion City",
    "Celadon City",
    "Fuchsia City",
    "Cinnabar Island",
    "Indigo Plateau",
    "Saffron City",
    "Route 1",
    "Route 2",
    "Route 3",
    "Route 4",
    "Route 5",
    "Route 6",
    "Route 7",
    "Route 8",
    "Route 9",
    "Route 10",
    "Route 11",
    "Route 12",
    "Route 13",
    "Route 14",
    "Route 15",
    "Route 16",
    "Route 17",
    "Route 18",
    "Route 19",
    "Route 20",
    "Route 21",
    "Route 22",
    "Route 23",
    "Route 24",
    "Route 25",
    "Route 26",
    "Route 27",
    "Route 28",
    "Route 29",
    "Route 30",
    "Route 31",
    "Route 32",
    "Route 33",
    "Route 34",
    "Route 35",
    "Route 36",
    "Route 37",
    "Route 38",
    "Route 39",
    "Route 40",
    "Route 41",
    "Route 42",
    "Route 43",
    "Route 44",
    "Route 45",
    "Route 46",
    "Route 47",
    "Route 48",
    "Diglett's Cave",
    "Mt. Moon",
    "Cerulean Cave",
    "Rock Tunnel",
    "Power Plant",
    "Safari Zone",
    "Seafoam Islands",
    "Sprout Tower",
    "Bell Tower",
    "Burned Tower",
    "National Park",
    "Radio Tower",
    "Ruins of Alph",
    "Union Cave",
    "Slowpoke Well",
    "Lighthouse",
    "Team Rocket HQ",
    "Ilex Forest",
    "Goldenrod Tunnel",
    "Mt. Mortar",
    "Ice Path",
    "Whirl Islands",
    "Mt. Silver Cave",
    "Dark Cave",
    "Victory Road",
    "Dragon's Den",
    "Tohjo Falls",
    "Viridian Forest",
    "Pokéathlon Dome",
    "S.S. Aqua",
    "Safari Zone Gate",
    "Cliff Cave",
    "Battle Frontier",
    "Frontier Access",
    "Bellchime Trail",
    "Sinjoh Ruins",
    "Embedded Tower",
    "Pokéwalker",
    "Cliff Edge Gate",
];

/// Ids 2000 and up: trades, day care and gifts.
pub(super) static GEN4_SPECIAL_LOCATIONS: [&str; 15] = [
    "Day-Care Couple",
    "Link Trade",
    "Link Trade",
    "Kanto",
    "Johto",
    "Hoenn",
    "Sinnoh",
    "----",
    "Distant Land",
    "Traveling Man",
    "Riley",
    "Cynthia",
    "Mystery Zone",
    "Mr. Pokémon",
    "Primo",
];

/// Ids 3000 and up: distribution events.
pub(super) static GEN4_EVENT_LOCATIONS: [&str; 20] = [
    "Lovely Place",
    "Pokémon Ranger",
    "Faraway Place",
    "Pokémon Movie",
    "Pokémon Movie 06",
    "Pokémon Movie 07",
    "Pokémon Movie 08",
    "Pokémon Movie 09",
    "Pokémon Movie 10",
    "Pokémon Movie 11",
    "Pokémon Cartoon",
    "Pokémon Center",
    "Pokémon Center Tokyo",
    "Pokémon Center Osaka",
    "Pokémon Center Fukuoka",
    "Pokémon Center Nagoya",
    "Pokémon Center Sapporo",
    "Pokémon Center Yokohama",
    "Nintendo World",
    "Pokémon Event",
];
