//! Species-name search over a static list; no persistence involved.

/// Lower-case species names
const SPECIES_NAMES: &[&str] = &[
    "bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon", "charizard", "squirtle",
    "wartortle", "blastoise", "caterpie", "metapod", "butterfree", "weedle", "kakuna",
    "beedrill", "pidgey", "pidgeotto", "pidgeot", "rattata", "raticate", "spearow", "fearow",
    "ekans", "arbok", "pikachu", "raichu", "sandshrew", "sandslash", "nidoran-f", "nidorina",
    "nidoqueen", "nidoran-m", "nidorino", "nidoking", "clefairy", "clefable", "vulpix",
    "ninetales", "jigglypuff", "wigglytuff", "zubat", "golbat", "oddish", "gloom", "vileplume",
    "paras", "parasect", "venonat", "venomoth", "diglett", "dugtrio", "meowth", "persian",
    "psyduck", "golduck", "mankey", "primeape", "growlithe", "arcanine", "poliwag", "poliwhirl",
    "poliwrath", "abra", "kadabra", "alakazam", "machop", "machoke", "machamp", "bellsprout",
    "weepinbell", "victreebel", "tentacool", "tentacruel", "geodude", "graveler", "golem",
    "ponyta", "rapidash", "slowpoke", "slowbro", "magnemite", "magneton", "farfetch'd", "doduo",
    "dodrio", "seel", "dewgong", "grimer", "muk", "shellder", "cloyster", "gastly", "haunter",
    "gengar", "onix", "drowzee", "hypno", "krabby", "kingler", "voltorb", "electrode",
    "exeggcute", "exeggutor", "cubone", "marowak", "hitmonlee", "hitmonchan", "lickitung",
    "koffing", "weezing", "rhyhorn", "rhydon", "chansey", "tangela", "kangaskhan", "horsea",
    "seadra", "goldeen", "seaking", "staryu", "starmie", "mr. mime", "scyther", "jynx",
    "electabuzz", "magmar", "pinsir", "tauros", "magikarp", "gyarados", "lapras", "ditto",
    "eevee", "vaporeon", "jolteon", "flareon", "porygon", "omanyte", "omastar", "kabuto",
    "kabutops", "aerodactyl", "snorlax", "articuno", "zapdos", "moltres", "dratini",
    "dragonair", "dragonite", "mewtwo", "mew", "chikorita", "bayleef", "meganium", "cyndaquil",
    "quilava", "typhlosion", "totodile", "croconaw", "feraligatr", "sentret", "furret",
    "hoothoot", "noctowl", "ledyba", "ledian", "spinarak", "ariados", "crobat", "chinchou",
    "lanturn", "pichu", "cleffa", "igglybuff", "togepi", "togetic", "natu", "xatu", "mareep",
    "flaaffy", "ampharos", "bellossom", "marill", "azumarill", "sudowoodo", "politoed",
    "hoppip", "skiploom", "jumpluff", "aipom", "sunkern", "sunflora", "yanma", "wooper",
    "quagsire", "espeon", "umbreon", "murkrow", "slowking", "misdreavus", "unown", "wobbuffet",
    "girafarig", "pineco", "forretress", "dunsparce", "gligar", "steelix", "snubbull",
    "granbull", "qwilfish", "scizor", "shuckle", "heracross", "sneasel", "teddiursa",
    "ursaring", "slugma", "magcargo", "swinub", "piloswine", "corsola", "remoraid", "octillery",
    "delibird", "mantine", "skarmory", "houndour", "houndoom", "kingdra", "phanpy", "donphan",
    "porygon2", "stantler", "smeargle", "tyrogue", "hitmontop", "smoochum", "elekid", "magby",
    "miltank", "blissey", "raikou", "entei", "suicune", "larvitar", "pupitar", "tyranitar",
    "lugia", "ho-oh", "celebi", "mime jr.", "porygon-z", "tapu koko", "tapu lele", "tapu bulu",
    "tapu fini", "mr. rime", "jangmo-o", "hakamo-o", "kommo-o",
];

/// Names containing `search` (case-insensitive), title-cased
pub fn search_species(search: &str) -> Vec<String> {
    let needle = search.to_lowercase();
    SPECIES_NAMES
        .iter()
        .filter(|name| name.contains(needle.as_str()))
        .map(|name| title_case(name))
        .collect()
}

/// Upper-case the first letter and every letter that follows a space or a
/// hyphen: `mr. mime` -> `Mr. Mime`, `ho-oh` -> `Ho-Oh`
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = true;
    for c in name.chars() {
        if boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        boundary = c == ' ' || c == '-';
    }
    out
}
