pub mod add;
pub mod analyze;
pub mod ask;
pub mod calendar;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod inventory;
pub mod list;
pub mod log;
pub mod share;
pub mod shifts;
pub mod theme;
pub mod voice;

use crate::config::Config;
use crate::core::filter::{self, ViewState};
use crate::errors::AppResult;
use crate::models::record::MaintenanceRecord;
use crate::store::initialize::init_store;
use crate::store::pool::StorePool;
use crate::store::{kv, records};

/// Open the store, creating or upgrading the schema when needed.
pub(crate) fn open_store(cfg: &Config) -> AppResult<StorePool> {
    let pool = StorePool::new(&cfg.store)?;
    init_store(&pool.conn)?;
    Ok(pool)
}

/// Authoritative collection plus the filtered view derived from the flags.
pub(crate) fn filtered_view(
    pool: &StorePool,
    month: Option<String>,
    location: Option<String>,
    search: Option<String>,
) -> AppResult<(ViewState, Vec<MaintenanceRecord>)> {
    let state = ViewState::new(month, location, search)?;
    let all = records::get_all(pool)?;
    let filtered = filter::filter_records(&state, &all);
    Ok((state, filtered))
}

/// The "light" theme disables ANSI color in the calendar/list views.
pub(crate) fn use_color(pool: &StorePool) -> bool {
    kv::get_theme(pool).map(|t| t != "light").unwrap_or(true)
}
