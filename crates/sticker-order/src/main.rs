use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use sticker_order::OrderWizard;
use sticker_pricing::Catalog;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("sticker-quote")
        .version(sticker_order::VERSION)
        .about("Price quotes for custom sticker orders")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("quote")
                .about("Quote a size/quantity pair")
                .arg(
                    Arg::new("size")
                        .long("size")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Catalog size index (see `catalog`)"),
                )
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .required(true)
                        .value_parser(value_parser!(f64))
                        .help("Order quantity; coerced to a positive integer"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the quote as JSON"),
                ),
        )
        .subcommand(Command::new("catalog").about("List sizes and quantity presets"));

    match cli.get_matches().subcommand() {
        Some(("quote", matches)) => {
            let size = *matches.get_one::<usize>("size").expect("required");
            let quantity = *matches.get_one::<f64>("quantity").expect("required");
            let json = matches.get_flag("json");
            run_quote(size, quantity, json)
        }
        Some(("catalog", _)) => {
            print_catalog();
            Ok(())
        }
        _ => unreachable!("arg_required_else_help"),
    }
}

fn run_quote(size: usize, quantity: f64, json: bool) -> anyhow::Result<()> {
    let mut wizard = OrderWizard::new(Catalog::real_estate());
    wizard.select_size(size).context("size selection failed")?;
    wizard.set_custom_quantity(quantity);

    let quote = wizard.quote().context("no quote available")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!(
        "{} x {} ({})",
        quote.quantity, quote.size_name, wizard.catalog().currency
    );
    println!("  unit price: ${:.2}", quote.unit_price);
    println!("  total:      ${:.2}", quote.total_price);
    if quote.discount_pct > 0 {
        println!("  discount:   {}%", quote.discount_pct);
    }
    println!("  shipping:   {}", wizard.shipping().label());
    if let Some(message) = wizard.upsell_message() {
        println!("  {message}");
    }
    Ok(())
}

fn print_catalog() {
    let catalog = Catalog::real_estate();
    println!("{} ({})", catalog.product, catalog.currency);
    println!("sizes:");
    for (index, size) in catalog.sizes.iter().enumerate() {
        println!("  [{index}] {} - ${:.2} each", size.name, size.unit_price);
    }
    println!("quantity presets:");
    for entry in OrderWizard::new(catalog).quantity_menu() {
        println!("  {}", entry.label);
    }
}
