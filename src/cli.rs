//! 命令行参数
//!
//! 只做参数解析和覆盖配置，不包含业务逻辑

use crate::config::Config;
use crate::services::renderer::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Academic team question packet generator
#[derive(Parser, Debug, Default)]
#[command(
    name = "academic_team_packet",
    version,
    about = "Generate a printable tossup / sixty-second question packet from a TSV question file."
)]
pub struct Cli {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tab-separated question file (question, answer, category, grade)
    #[arg(long)]
    pub questions: Option<String>,

    /// Output filename base
    #[arg(long)]
    pub output: Option<String>,

    /// Output directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Number of tossups to generate
    #[arg(long, alias = "num_tossup")]
    pub num_tossup: Option<usize>,

    /// Seed for question sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file with sixty-second rounds
    #[arg(long)]
    pub sixty_second: Option<String>,

    /// Title page: organization name
    #[arg(long)]
    pub organization: Option<String>,

    /// Title page: grade range, e.g. "5&6"
    #[arg(long)]
    pub grades: Option<String>,

    /// Title page: tournament type
    #[arg(long)]
    pub tournament_type: Option<String>,

    /// Title page: year label
    #[arg(long)]
    pub year: Option<String>,

    /// Title page: game number
    #[arg(long)]
    pub game_number: Option<String>,

    /// Omit the spacer before the game number on the title page
    #[arg(long)]
    pub no_title_spacer: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 把命令行参数叠加到配置上
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(v) = self.questions {
            config.questions_path = v;
        }
        if let Some(v) = self.output {
            config.output_base = v;
        }
        if let Some(v) = self.output_dir {
            config.output_dir = v;
        }
        if let Some(v) = self.num_tossup {
            config.num_tossup = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.format {
            config.format = v;
        }
        if let Some(v) = self.sixty_second {
            config.sixty_second_path = Some(v);
        }
        if let Some(v) = self.organization {
            config.title.organization = v;
        }
        if let Some(v) = self.grades {
            config.title.grades = v;
        }
        if let Some(v) = self.tournament_type {
            config.title.tournament_type = v;
        }
        if let Some(v) = self.year {
            config.title.year = v;
        }
        if let Some(v) = self.game_number {
            config.title.game_number = v;
        }
        if self.no_title_spacer {
            config.title.spacer = false;
        }
        config.verbose |= self.verbose;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "academic_team_packet",
            "--questions",
            "pool.tsv",
            "--num_tossup",
            "20",
            "--format",
            "text",
            "--game-number",
            "4",
            "--no-title-spacer",
        ])
        .unwrap();

        let config = cli.apply(Config::default());
        assert_eq!(config.questions_path, "pool.tsv");
        assert_eq!(config.num_tossup, 20);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.title.game_number, "4");
        assert!(!config.title.spacer);
        // 未指定的参数保持原值
        assert_eq!(config.output_base, "Questions");
        assert_eq!(config.seed, 12345);
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["academic_team_packet"]).unwrap();
        let config = cli.apply(Config::default());
        assert_eq!(config.num_tossup, 80);
        assert!(config.title.spacer);
        assert!(!config.verbose);
    }

    #[test]
    fn test_rejects_non_numeric_count() {
        assert!(Cli::try_parse_from(["academic_team_packet", "--num-tossup", "many"]).is_err());
    }
}
