// Combat
pub const MIN_DAMAGE: u32 = 1;
pub const ESCAPE_CHANCE: f64 = 0.5;
pub const HEAL_ABILITY_AMOUNT: u32 = 30;
pub const ROGUE_CRIT_MULTIPLIER: u32 = 3;
pub const POWER_STRIKE_MULTIPLIER: u32 = 2;
pub const FIREBALL_MULTIPLIER: u32 = 2;

// Enemy level brackets
pub const GOBLIN_MAX_LEVEL: u32 = 2;
pub const ORC_MAX_LEVEL: u32 = 5;

// Character creation and leveling
pub const STARTING_GOLD: u32 = 100;
pub const XP_PER_LEVEL_FACTOR: u32 = 100;
pub const LEVEL_UP_MAX_HEALTH_GAIN: u32 = 10;
pub const LEVEL_UP_STRENGTH_GAIN: u32 = 2;
pub const LEVEL_UP_MAGIC_GAIN: u32 = 2;

// Inventory and shop
pub const MAX_INVENTORY_SIZE: usize = 20;
pub const SELL_PRICE_DIVISOR: u32 = 2;

// Death and revival
pub const REVIVE_COST_GOLD: u32 = 20;

// Message log shown in the UI
pub const MESSAGE_LOG_CAPACITY: usize = 10;
