//! CLI argument definitions shared by all commands.

use anyhow::Context;
use clap::{Args, ValueEnum};
use relation_core::{
    Distribution, OffsetPolicy, RelationConfig, DEFAULT_MAXIMUM_LEVEL,
};
use std::path::PathBuf;
use tracing::warn;

/// Number of columns when neither a config file nor `--columns` says otherwise.
pub const DEFAULT_COLUMNS: usize = 2;

/// Number of rows when neither a config file nor `--rows` says otherwise.
pub const DEFAULT_ROWS: u64 = 1000;

/// Distribution selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistributionKind {
    Independent,
    Correlated,
    AntiCorrelated,
    Gaussian,
}

impl DistributionKind {
    fn to_distribution(self) -> Distribution {
        match self {
            DistributionKind::Independent => Distribution::Independent,
            DistributionKind::Correlated => Distribution::correlated(),
            DistributionKind::AntiCorrelated => Distribution::anti_correlated(),
            DistributionKind::Gaussian => Distribution::Gaussian,
        }
    }
}

impl From<&Distribution> for DistributionKind {
    fn from(distribution: &Distribution) -> Self {
        match distribution {
            Distribution::Independent => DistributionKind::Independent,
            Distribution::Correlated { .. } => DistributionKind::Correlated,
            Distribution::AntiCorrelated { .. } => DistributionKind::AntiCorrelated,
            Distribution::Gaussian => DistributionKind::Gaussian,
        }
    }
}

/// Offset policy selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetPolicyArg {
    SkipBeforeMaterialize,
    IgnoreWhenMaterialized,
}

impl From<OffsetPolicyArg> for OffsetPolicy {
    fn from(arg: OffsetPolicyArg) -> Self {
        match arg {
            OffsetPolicyArg::SkipBeforeMaterialize => OffsetPolicy::SkipBeforeMaterialize,
            OffsetPolicyArg::IgnoreWhenMaterialized => OffsetPolicy::IgnoreWhenMaterialized,
        }
    }
}

/// Relation parameters. Flags override values read from `--config`.
#[derive(Args, Clone, Debug, Default)]
pub struct RelationArgs {
    /// Path to relation config YAML file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Distribution of the column values
    #[arg(long, value_enum)]
    pub distribution: Option<DistributionKind>,

    /// Half-width of the correlated jitter band
    #[arg(long)]
    pub spread: Option<f64>,

    /// Number of data columns (all sharing --max-level)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Inclusive maximum level of every column
    #[arg(long)]
    pub max_level: Option<u32>,

    /// Per-column inclusive maximum levels (comma-separated, overrides --columns)
    #[arg(long, value_delimiter = ',')]
    pub max_values: Vec<u32>,

    /// Number of rows to generate
    #[arg(long)]
    pub rows: Option<u64>,

    /// Rows generated and discarded before the first emitted row
    #[arg(long)]
    pub offset: Option<u64>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Materialize the relation in memory before emitting it
    /// (`--in-memory false` overrides a config file)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub in_memory: Option<bool>,

    /// Re-seed on reset so a streaming relation replays the same rows
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub reproducible_reset: Option<bool>,

    /// How the offset interacts with --in-memory
    #[arg(long, value_enum)]
    pub offset_policy: Option<OffsetPolicyArg>,
}

impl RelationArgs {
    /// Build the effective config: YAML file (if any), then flag overrides.
    pub fn to_config(&self) -> anyhow::Result<RelationConfig> {
        let mut config = match &self.config {
            Some(path) => RelationConfig::from_file(path)
                .with_context(|| format!("Failed to load relation config: {}", path.display()))?,
            None => RelationConfig::with_columns(
                Distribution::Independent,
                DEFAULT_COLUMNS,
                DEFAULT_MAXIMUM_LEVEL,
                DEFAULT_ROWS,
            ),
        };

        // Switching kinds resets the parameters; the same kind keeps the file's
        if let Some(kind) = self.distribution {
            if DistributionKind::from(&config.distribution) != kind {
                config.distribution = kind.to_distribution();
            }
        }
        if let Some(new_spread) = self.spread {
            match &mut config.distribution {
                Distribution::Correlated { spread } => *spread = new_spread,
                other => warn!("--spread ignored for {} distribution", other.name()),
            }
        }

        if !self.max_values.is_empty() {
            config.max_values = self.max_values.clone();
        } else if self.columns.is_some() || self.max_level.is_some() {
            let columns = self.columns.unwrap_or(config.columns());
            let max_level = self
                .max_level
                .or_else(|| config.max_values.first().copied())
                .unwrap_or(DEFAULT_MAXIMUM_LEVEL);
            config.max_values = vec![max_level; columns];
        }

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(policy) = self.offset_policy {
            config.offset_policy = policy.into();
        }
        if let Some(in_memory) = self.in_memory {
            config.in_memory = in_memory;
        }
        if let Some(reproducible_reset) = self.reproducible_reset {
            config.reproducible_reset = reproducible_reset;
        }

        config
            .validate()
            .with_context(|| "Invalid relation config")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RelationArgs::default().to_config().unwrap();
        assert_eq!(config.distribution, Distribution::Independent);
        assert_eq!(config.max_values, vec![DEFAULT_MAXIMUM_LEVEL; DEFAULT_COLUMNS]);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_flags() {
        let args = RelationArgs {
            distribution: Some(DistributionKind::Correlated),
            spread: Some(0.05),
            columns: Some(4),
            max_level: Some(5),
            rows: Some(10),
            offset: Some(2),
            seed: Some(42),
            in_memory: Some(true),
            offset_policy: Some(OffsetPolicyArg::IgnoreWhenMaterialized),
            ..Default::default()
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.distribution, Distribution::Correlated { spread: 0.05 });
        assert_eq!(config.max_values, vec![5, 5, 5, 5]);
        assert_eq!(config.rows, 10);
        assert_eq!(config.offset, 2);
        assert_eq!(config.seed, 42);
        assert!(config.in_memory);
        assert_eq!(config.offset_policy, OffsetPolicy::IgnoreWhenMaterialized);
    }

    #[test]
    fn test_max_values_override_columns() {
        let args = RelationArgs {
            columns: Some(5),
            max_values: vec![9, 4, 1],
            ..Default::default()
        };
        assert_eq!(args.to_config().unwrap().max_values, vec![9, 4, 1]);
    }

    #[test]
    fn test_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "distribution:\n  type: correlated\n  spread: 0.3\nmax_values: [7, 7, 7]\nrows: 50\nseed: 9"
        )
        .unwrap();

        let args = RelationArgs {
            config: Some(file.path().to_path_buf()),
            spread: Some(0.1),
            columns: Some(2),
            rows: Some(20),
            ..Default::default()
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.distribution, Distribution::Correlated { spread: 0.1 });
        assert_eq!(config.max_values, vec![7, 7]);
        assert_eq!(config.rows, 20);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_flags_switch_off_file_booleans() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "max_values: [3, 3]\nrows: 5\nin_memory: true\nreproducible_reset: true"
        )
        .unwrap();
        let path = file.path().to_path_buf();

        let from_file = RelationArgs {
            config: Some(path.clone()),
            ..Default::default()
        };
        let config = from_file.to_config().unwrap();
        assert!(config.in_memory);
        assert!(config.reproducible_reset);

        let overridden = RelationArgs {
            config: Some(path),
            in_memory: Some(false),
            reproducible_reset: Some(false),
            ..Default::default()
        };
        let config = overridden.to_config().unwrap();
        assert!(!config.in_memory);
        assert!(!config.reproducible_reset);
    }

    #[test]
    fn test_same_distribution_flag_keeps_file_calibration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "distribution:\n  type: anti_correlated\n  calibration:\n    lower_x: 2.0\n    lower_y: 2.0\n    upper_x: 1.0\n    upper_y: 1.0\nmax_values: [9, 9]\nrows: 10"
        )
        .unwrap();
        let calibrated = RelationConfig::from_file(file.path()).unwrap().distribution;

        let same_kind = RelationArgs {
            config: Some(file.path().to_path_buf()),
            distribution: Some(DistributionKind::AntiCorrelated),
            ..Default::default()
        };
        assert_eq!(same_kind.to_config().unwrap().distribution, calibrated);

        let other_kind = RelationArgs {
            config: Some(file.path().to_path_buf()),
            distribution: Some(DistributionKind::Correlated),
            ..Default::default()
        };
        assert_eq!(
            other_kind.to_config().unwrap().distribution,
            Distribution::correlated()
        );
    }

    #[test]
    fn test_cli_boolean_flag_forms() {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[command(flatten)]
            relation: RelationArgs,
        }

        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.relation.in_memory, None);
        let cli = Cli::parse_from(["test", "--in-memory"]);
        assert_eq!(cli.relation.in_memory, Some(true));
        let cli = Cli::parse_from(["test", "--in-memory", "false", "--reproducible-reset"]);
        assert_eq!(cli.relation.in_memory, Some(false));
        assert_eq!(cli.relation.reproducible_reset, Some(true));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let args = RelationArgs {
            columns: Some(0),
            ..Default::default()
        };
        assert!(args.to_config().is_err());

        let args = RelationArgs {
            config: Some(PathBuf::from("/nonexistent/relation.yaml")),
            ..Default::default()
        };
        let err = args.to_config().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load relation config"));
    }
}
