use anyhow::Context;
use clap::Parser;
use pairwise_lists::utils::error::ErrorSeverity;
use pairwise_lists::utils::{logger, validation::Validate};
use pairwise_lists::{
    append_to, max_of_sum, sum_with_policy, CliConfig, Command, ListError, Number, OutputFormat,
    SharedAccumulator, TomlConfig,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum Report {
    Sum { policy: String, result: Vec<Number> },
    Max { result: Number },
    Append { fresh: Vec<Vec<Number>>, shared: Vec<Number> },
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path).unwrap_or_else(|e| fail(&e));
            if let Err(e) = file.validate() {
                fail(&e);
            }
            Some(file)
        }
        None => None,
    };

    let format = config
        .effective_format(file_config.as_ref())
        .unwrap_or_else(|e| fail(&e));

    let report = match run(&config.command, file_config.as_ref()) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    print_report(&report, format)
}

fn run(command: &Command, file_config: Option<&TomlConfig>) -> pairwise_lists::Result<Report> {
    match command {
        Command::Sum {
            left,
            right,
            policy,
        } => {
            let policy = CliConfig::effective_policy(*policy, file_config)?;
            let result = sum_with_policy(policy, left, right)?;
            Ok(Report::Sum {
                policy: policy.as_str().to_string(),
                result,
            })
        }
        Command::Max { left, right } => Ok(Report::Max {
            result: max_of_sum(left, right)?,
        }),
        Command::Append { value, into, times } => {
            // 每次呼叫都從新的列表開始，除非明確傳入
            let fresh = (0..*times)
                .map(|_| append_to(*value, into.clone()))
                .collect();

            let mut shared = SharedAccumulator::new();
            for _ in 0..*times {
                shared.push(*value);
            }

            Ok(Report::Append {
                fresh,
                shared: shared.into_inner(),
            })
        }
    }
}

fn print_report(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string(report).context("encoding report as JSON")?;
            println!("{}", json);
        }
        OutputFormat::Plain => match report {
            Report::Sum { result, .. } => println!("{}", render(result)),
            Report::Max { result } => println!("{}", result),
            Report::Append { fresh, shared } => {
                for (call, items) in fresh.iter().enumerate() {
                    println!("call {}: {}", call + 1, render(items));
                }
                println!("shared: {}", render(shared));
            }
        },
    }
    Ok(())
}

fn render(values: &[Number]) -> String {
    let items: Vec<String> = values.iter().map(Number::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn fail(e: &ListError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
