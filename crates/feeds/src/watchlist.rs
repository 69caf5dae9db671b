//! Default scan watchlist.

/// Base tickers checked against Binance USDT markets at startup.
pub const DEFAULT_WATCHLIST: &[&str] = &[
    "AT", "A2Z", "ACE", "ACH", "ACT", "ADA", "ADX", "AGLD", "AIXBT", "ALGO",
    "ALICE", "ALPINE", "ALT", "AMP", "ANKR", "APE", "API3", "APT", "AR", "ARB",
    "ARDR", "ARK", "ARKM", "ARPA", "ASTR", "ATA", "ATOM", "AVA", "AVAX", "AWE",
    "AXL", "BANANA", "BAND", "BAT", "BCH", "BEAMX", "BICO", "BIO", "BLUR", "BMT",
    "BTC", "CELO", "CELR", "CFX", "CGPT", "CHR", "CHZ", "CKB", "COOKIE", "COS",
    "CTSI", "CVC", "CYBER", "DASH", "DATA", "DCR", "DENT", "DEXE", "DGB", "DIA",
    "DOGE", "DOT", "DUSK", "EDU", "EGLD", "ENJ", "ENS", "EPIC", "ERA", "ETC",
    "ETH", "FET", "FIDA", "FIL", "FIO", "FLOW", "FLUX", "GALA", "GAS", "GLM",
    "GLMR", "GMT", "GPS", "GRT", "GTC", "HBAR", "HEI", "HIGH", "HIVE", "HOOK",
    "HOT", "HYPER", "ICP", "ICX", "ID", "IMX", "INIT", "IO", "IOST", "IOTA",
    "IOTX", "IQ", "JASMY", "KAIA", "KAITO", "KSM", "LA", "LAYER", "LINK", "LPT",
    "LRC", "LSK", "LTC", "LUNA", "MAGIC", "MANA", "MANTA", "MASK", "MDT", "ME",
    "METIS", "MINA", "MOVR", "MTL", "NEAR", "NEWT", "NFP", "NIL", "NKN", "NTRN",
    "OM", "ONE", "ONG", "OP", "ORDI", "OXT", "PARTI", "PAXG", "PHA", "PHB",
    "PIVX", "PLUME", "POL", "POLYX", "POND", "PORTAL", "POWR", "PROM", "PROVE", "PUNDIX",
    "PYTH", "QKC", "QNT", "QTUM", "RAD", "RARE", "REI", "RENDER", "REQ", "RIF",
    "RLC", "RONIN", "ROSE", "RSR", "RVN", "SAGA", "SAHARA", "SAND", "SC", "SCR",
    "SCRT", "SEI", "SFP", "SHELL", "SIGN", "SKL", "SOL", "SOPH", "SSV", "STEEM",
    "STORJ", "STRAX", "STX", "SUI", "SXP", "SXT", "SYS", "TAO", "TFUEL", "THETA",
    "TIA", "TNSR", "TON", "TOWNS", "TRB", "TRX", "TWT", "UMA", "UTK", "VANA",
    "VANRY", "VET", "VIC", "VIRTUAL", "VTHO", "WAXP", "WCT", "WIN", "WLD", "XAI",
    "XEC", "XLM", "XNO", "XRP", "XTZ", "XVG", "ZEC", "ZEN", "ZIL", "ZK",
    "ZRO", "0G", "2Z", "C", "D", "ENSO", "G", "HOLO", "KITE", "LINEA",
    "MIRA", "OPEN", "S", "SAPIEN", "SOMI", "W", "WAL", "XPL", "ZBT", "ZKC",
];
