use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::initialize::init_store;
use crate::store::pool::StorePool;
use crate::ui::messages::success;

/// Create the config file and an empty store with the current schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let store_path = Config::init_all(cli.store.clone(), cli.test)?;

    let pool = StorePool::new(&store_path.to_string_lossy())?;
    init_store(&pool.conn)?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }
    success(format!("Store:       {:?}", store_path));

    Ok(())
}
