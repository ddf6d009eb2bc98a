use anyhow::Result;

use logoconv::config::{CONFIRMATION, Config};

fn main() -> Result<()> {
    // .env 只用于设置 RUST_LOG
    dotenvy::dotenv().ok();
    env_logger::init();

    logoconv::convert(&Config::default())?;
    println!("{CONFIRMATION}");

    Ok(())
}
