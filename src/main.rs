use nuosc_logo::{LogoConfig, generate, init_tracing};

fn main() -> anyhow::Result<()> {
    let config = LogoConfig::default();
    init_tracing(config.log_level);
    generate(&config)?;
    Ok(())
}
