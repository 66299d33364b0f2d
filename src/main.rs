use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cli;
mod config;

use cli::{Cli, Commands, UserArgs};
use config::Config;
use verdict::VerdictError;
use verdict::classify::Classifier;
use verdict::pricing::OrderCalculator;
use verdict::validation::{
    Checked, OrderItem, OrderValidator, PasswordValidator, UserInput, UserValidator, ValidationResult, Validator,
    load_order,
};

fn setup_logging(default_filter: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("verdict")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("verdict.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Whether the checked candidate passed
type Passed = bool;

fn run_application(cli: &Cli, config: &Config) -> Result<Passed> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Password { password } => handle_password_command(password, config, cli.json),
        Commands::User(args) => handle_user_command(args, config, cli.json),
        Commands::Classify { age } => handle_classify_command(*age, config, cli.json),
        Commands::Order { file } => handle_order_command(file, config, cli.json),
        Commands::Rules => handle_rules_command(config),
    }
}

fn print_result(label: &str, result: &ValidationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    if result.is_valid() {
        println!("{} {}", format!("{}:", label).green(), "Valid".green());
    } else {
        println!("{} {}", format!("{}:", label).red(), "Invalid".red());
        for error in result.errors() {
            println!("  - {}", error);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_password_command(password: &str, config: &Config, json: bool) -> Result<Passed> {
    info!("Checking password of length {}", password.chars().count());
    let validator = PasswordValidator::new(&config.password);
    let result = validator.validate(password)?;
    print_result("Password", &result, json)?;
    Ok(result.is_valid())
}

fn load_user_input(args: &UserArgs) -> Result<UserInput> {
    match &args.file {
        Some(path) => {
            UserInput::load_from_file(path).context(format!("Failed to load user file {}", path.display()))
        }
        None => Ok(UserInput {
            name: args.name.clone(),
            email: args.email.clone(),
            age: args.age,
        }),
    }
}

fn handle_user_command(args: &UserArgs, config: &Config, json: bool) -> Result<Passed> {
    let input = load_user_input(args)?;
    info!("Validating user: {:?}", input.name);

    let validator = UserValidator::new(&config.user).context("Invalid user policy")?;
    let classifier = Classifier::from_config(&config.classification);

    match validator.admit(&input).context("User could not be validated")? {
        Checked::Accepted(user) => {
            if json {
                let user_type = user.user_type(&classifier);
                print_json(&serde_json::json!({
                    "errors": Vec::<String>::new(),
                    "user": &user,
                    "user_type": user_type,
                }))?;
            } else {
                println!("{} {}", "User:".green(), "Valid".green());
                println!("  {}", user.summary(&classifier));
                println!("  Email: {}", user.email());
                println!("  Age: {}", user.age());
            }
            Ok(true)
        }
        Checked::Rejected(result) => {
            print_result("User", &result, json)?;
            Ok(false)
        }
    }
}

fn handle_classify_command(age: i64, config: &Config, json: bool) -> Result<Passed> {
    info!("Classifying age {}", age);
    let classifier = Classifier::from_config(&config.classification);
    let user_type = classifier.classify(age);
    if json {
        print_json(&serde_json::json!({ "age": age, "user_type": user_type }))?;
    } else {
        println!("{} {}", format!("{}:", age).cyan(), user_type);
    }
    Ok(true)
}

fn handle_order_command(file: &Path, config: &Config, json: bool) -> Result<Passed> {
    info!("Pricing order from {}", file.display());
    let items = load_order(file).context(format!("Failed to load order file {}", file.display()))?;

    let calculator = OrderCalculator::new(config.pricing.clone());
    match calculator.breakdown(&items) {
        Ok(total) => {
            if json {
                print_json(&total)?;
            } else {
                println!("{} {} item(s)", "Order:".green(), items.len());
                println!("  Subtotal: {:.2}", total.subtotal);
                println!("  Shipping: {:.2}", total.shipping);
                println!("  {} {:.2}", "Total:".bold(), total.total);
            }
            Ok(true)
        }
        Err(VerdictError::Rejected(result)) => {
            print_result("Order", &result, json)?;
            Ok(false)
        }
        Err(e) => Err(eyre!(e)),
    }
}

fn print_rules(title: &str, names: &[&str]) {
    println!("{}", title.cyan());
    for (i, name) in names.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
}

fn handle_rules_command(config: &Config) -> Result<Passed> {
    let password = PasswordValidator::new(&config.password);
    print_rules(password.description(), &password.rule_names());

    let user = UserValidator::new(&config.user).context("Invalid user policy")?;
    println!("{}", user.description().cyan());
    for (field, rules) in user.rule_names_by_field() {
        println!("  {}: {}", field, rules.join(", "));
    }

    let order = OrderValidator::new();
    print_rules(Validator::<[OrderItem]>::description(&order), &order.rule_names());

    let classifier = Classifier::from_config(&config.classification);
    println!("{}", "age classification".cyan());
    for threshold in classifier.thresholds() {
        println!("  >= {}: {}", threshold, classifier.classify(threshold));
    }
    println!("  otherwise: {}", config.classification.default);
    Ok(true)
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Logging level comes from the config
    setup_logging(config.log_filter()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    let passed = run_application(&cli, &config).context("Application failed")?;

    Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
