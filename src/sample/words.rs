//! Built-in wordlists for synthetic hostnames

/// Number of hosts produced per run
pub const DEFAULT_COUNT: usize = 30;

/// Registered-looking domains. Every entry contains a '.'.
pub const DOMAINS: &[&str] = &[
    "bartell.com",
    "fay-king.com",
    "gierschner.org",
    "johann.com",
    "junitz.com",
    "kassulke-spencer.com",
    "kessler.com",
    "kostolzin.de",
    "kuhlman-wolf.info",
    "kulas-douglas.biz",
    "larson-schumm.info",
    "lind-sipes.com",
    "lockman.com",
    "losekann.com",
    "maelzer.org",
    "mayer.biz",
    "reinger.info",
    "roemer.com",
    "scholz.net",
    "sipes.com",
    "trapp.com",
    "wesack.com",
    "zorbach.com",
];

/// Service keywords, reusable within a run
pub const SUBDOMAINS: &[&str] = &["mail", "www", "vpn", "ftp", "gateway"];

/// Machine names, each used at most once per run
pub const SERVERS: &[&str] = &[
    "antonetta",
    "balduin",
    "elias",
    "ermanno",
    "ethelyn",
    "fechner",
    "froehlich",
    "gene",
    "heinz",
    "heser",
    "holsten",
    "hornich",
    "iliana",
    "kadeem",
    "kurt",
    "leslee",
    "meyer",
    "moesha",
    "monja",
    "reiner",
    "roland",
    "russel",
    "rust",
    "sandy",
    "teobaldo",
    "valerius",
    "wulff",
    "zaida",
];
