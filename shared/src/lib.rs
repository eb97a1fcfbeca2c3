pub mod collate;
pub mod countries;
pub mod player;
pub mod render;
pub mod retry;
pub mod search;
pub mod stats;
pub mod steam_id;
pub mod view;

pub use player::{DASH, DatabaseError, Player, PlayerDatabase};
pub use retry::{RetryExhausted, RetryPolicy};
pub use stats::PlayerStats;
pub use steam_id::{STEAM_ID64_BASE, SteamId, steam_id_to_steam_id64, steam_id64_to_steam_id};
pub use view::{AlphaSort, BehaviorFilter, DescriptionFilter, ViewState, derive_view};
