/// ─── LocalTerra Genesis Constants ───────────────────────────────────────────
///
/// Fixed values written into a genesis when it is turned into a
/// single-validator local network.
///
/// Base unit:  micro-denoms (1 LUNA = 1,000,000 uluna)
/// Power:      1 unit of voting power = 1,000,000 bonded uluna

// ── Units ────────────────────────────────────────────────────────────────────

/// Bonded micro-tokens backing one unit of consensus voting power.
pub const TOKENS_PER_POWER: u128 = 1_000_000;

/// Fractional digits of an SDK `Dec` string.
pub const DEC_PRECISION: usize = 18;

// ── Record type tags ─────────────────────────────────────────────────────────

pub const BASE_ACCOUNT_TYPE: &str = "/cosmos.auth.v1beta1.BaseAccount";

pub const TENDERMINT_ED25519_TYPE: &str = "tendermint/PubKeyEd25519";

pub const COSMOS_ED25519_TYPE: &str = "/cosmos.crypto.ed25519.PubKey";

pub const BOND_STATUS_BONDED: &str = "BOND_STATUS_BONDED";

// ── Staking defaults ─────────────────────────────────────────────────────────

pub const COMMISSION_RATE: &str = "0.100000000000000000";
pub const COMMISSION_MAX_RATE: &str = "0.200000000000000000";
pub const COMMISSION_MAX_CHANGE_RATE: &str = "0.010000000000000000";

pub const COMMISSION_UPDATE_TIME: &str = "2020-08-24T08:43:02.336889Z";

pub const MIN_SELF_DELEGATION: &str = "1";

/// Zero timestamp used for unbonding time and jailed-until.
pub const EPOCH_TIME: &str = "1970-01-01T00:00:00Z";

// ── Distribution periods ─────────────────────────────────────────────────────

/// Period the initial delegation starts from; its historical rewards record
/// is referenced by the validator and by the delegation.
pub const STARTING_PERIOD: &str = "1";
pub const CURRENT_PERIOD: &str = "2";
pub const HISTORICAL_REFERENCE_COUNT: u32 = 2;

// ── Initial height flag ──────────────────────────────────────────────────────

/// `--initial-height` value meaning "keep the genesis value". Compared as a
/// literal string, so `"00"` is an override.
pub const KEEP_INITIAL_HEIGHT: &str = "0";

// ── LocalTerra validator ─────────────────────────────────────────────────────

pub const LOCALTERRA_CHAIN_ID: &str = "localterra";
pub const LOCALTERRA_MONIKER: &str = "localterra";
pub const LOCALTERRA_WEBSITE: &str = "https://github.com/terra-project/LocalTerra";

pub const LOCALTERRA_NODE_ID: &str = "DA0317A8E3251C9AEAA38C34820568DCD030CF3F";
pub const LOCALTERRA_PUB_KEY: &str = "/zGmkgCWRFsJLETAzlzYsbu7EHS5HWpaSyR22rlFM68=";
pub const LOCALTERRA_ACC_ADDR: &str = "terra1dcegyrekltswvyy0xy69ydgxn9x8x32zdtapd8";
pub const LOCALTERRA_VAL_ADDR: &str = "terravaloper1dcegyrekltswvyy0xy69ydgxn9x8x32zdy3ua5";
pub const LOCALTERRA_CONS_ADDR: &str = "terravalcons1mgp3028ry5wf464r3s6gyptgmngrpnelhkuyvm";

/// bonded_tokens_pool module account.
pub const BONDED_POOL_ADDR: &str = "terra1fl48vsnmsdzcv85q5d2q4z5ajdha8yu3nln0mh";

pub const BOND_DENOM: &str = "uluna";

/// Test accounts funded on every localterra network. The first one is the
/// validator's own account.
pub const LOCALTERRA_ADDRS: [&str; 11] = [
    "terra1dcegyrekltswvyy0xy69ydgxn9x8x32zdtapd8",
    "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v",
    "terra17lmam6zguazs5q5u6z5mmx76uj63gldnse2pdp",
    "terra1757tkx08n0cqrw7p86ny9lnxsqeth0wgp0em95",
    "terra199vw7724lzkwz6lf2hsx04lrxfkz09tg8dlp6r",
    "terra18wlvftxzj6zt0xugy2lr9nxzu402690ltaf4ss",
    "terra1e8ryd9ezefuucd4mje33zdms9m2s90m57878v9",
    "terra17tv2hvwpg0ukqgd2y5ct2w54fyan7z0zxrm2f9",
    "terra1lkccuqgj6sjwjn8gsa9xlklqv4pmrqg9dx2fxc",
    "terra1333veey879eeqcff8j3gfcgwt8cfrg9mq20v6f",
    "terra1fmcjjt6yc9wqup2r06urnrd928jhrde6gcld6n",
];

/// Bundle credited to each seeded address.
pub const INITIAL_BALANCE: [(&str, u128); 5] = [
    ("ueur", 10_000_000_000_000_000),
    ("ukrw", 1_000_000_000_000_000_000),
    ("uluna", 1_000_000_000_000_000),
    ("usdr", 10_000_000_000_000_000),
    ("uusd", 10_000_000_000_000_000),
];

/// Total supply added for the seeded accounts (eleven initial balances).
/// The bonded voting power is added to the bond denom on top of this.
pub const SUPPLY_INCREMENT: [(&str, u128); 5] = [
    ("uluna", 11_000_000_000_000_000),
    ("uusd", 110_000_000_000_000_000),
    ("ukrw", 11_000_000_000_000_000_000),
    ("ueur", 110_000_000_000_000_000),
    ("usdr", 110_000_000_000_000_000),
];
