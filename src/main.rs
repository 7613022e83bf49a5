use academic_team_packet::cli::Cli;
use academic_team_packet::utils::logging;
use academic_team_packet::{Config, PacketGenerator};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::load(cli.config.as_deref())?;
    let config = cli.apply(config);

    // 初始化日志
    logging::init(config.verbose);

    let path = PacketGenerator::new(config).run()?;
    println!("Success! Document saved as: {}", path.display());

    Ok(())
}
