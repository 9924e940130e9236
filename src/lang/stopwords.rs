//! Stopword lists used for rule-based language scoring. Short and
//! high-frequency by design — these words dominate running text regardless
//! of topic, which is what makes them useful as a cheap language signal.

pub(super) static LANGUAGES: &[(&str, &[&str])] = &[
    ("eng", ENGLISH),
    ("fra", FRENCH),
    ("deu", GERMAN),
    ("lat", LATIN),
];

static ENGLISH: &[&str] = &[
    "the", "of", "and", "to", "a", "in", "that", "was", "his", "he", "it", "with", "as", "for",
    "had", "is", "at", "by", "on", "not", "be", "this", "but", "from", "or", "which", "her",
    "were", "they", "all", "have", "an", "we", "been", "their", "are", "she", "him",
    "would", "there", "said", "what", "so", "up", "out", "if", "about", "who", "get",
];

static FRENCH: &[&str] = &[
    "le", "la", "de", "et", "un", "une", "les", "des", "du", "en", "que", "qui", "dans", "pour",
    "pas", "sur", "au", "avec", "ce", "son", "sa", "ses", "il", "elle", "vous", "nous", "ils",
    "mais", "ou", "leurs", "leur", "etait", "avait", "etre", "avoir", "plus", "tout",
    "comme", "cette", "ont", "aux", "sont", "avons",
];

static GERMAN: &[&str] = &[
    "der", "die", "das", "und", "ist", "von", "den", "dem", "ein", "eine", "zu", "mit", "auf",
    "fur", "nicht", "sich", "war", "sie", "er", "es", "wir", "ihr", "als", "auch", "aber", "wie",
    "an", "im", "aus", "bei", "dass", "sind", "einer", "haben", "hatte", "wird", "nach", "uber",
];

static LATIN: &[&str] = &[
    "et", "in", "est", "non", "ad", "cum", "de", "qui", "ut", "sed", "sunt", "ex", "per", "quae",
    "esse", "si", "hoc", "quod", "ab", "atque", "nec", "enim", "autem", "ergo", "etiam", "quam",
    "sine", "inter", "omnia", "suo", "eius", "illud",
];
