//! Ping the API with credentials from the environment
//!
//! ```sh
//! EXACTTARGET_USERNAME=... EXACTTARGET_PASSWORD=... EXACTTARGET_LOG_MODE=debug \
//!     cargo run -p exacttarget-api --example check_online
//! ```

use exacttarget_api::logging::init_logging_from_env;
use exacttarget_api::ExactTargetClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    let client = ExactTargetClient::from_env()?;
    if client.check_online()? {
        println!("ExactTarget API is running");
    } else {
        println!("ExactTarget API did not report Running");
    }

    Ok(())
}
