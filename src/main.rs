use anyhow::Result;
use veda_icon_gen::{config::IconConfig, icon_gen};

fn main() -> Result<()> {
    env_logger::init();

    let config = IconConfig::builtin()?;
    icon_gen::generate_icons(&config)
}
