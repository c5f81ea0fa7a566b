use anyhow::Context;
use client::domain::{
    a001_category, a002_bike_model, a003_stock, a004_customer, a005_courier, a006_transfer,
    a007_payment, a008_dealer_consignment, a009_setting,
};
use client::projections::{p901_sales_report, p902_stock_report};
use client::shared::api_client::ApiClient;
use client::shared::blob_store::SqliteBlobStore;
use client::shared::config;
use client::system::{self, auth, users};
use contracts::projections::p901_sales_report::dto::SalesReportRequest;
use contracts::shared::nic;
use contracts::shared::paging::PageRequest;
use contracts::system::auth::{Capabilities, Role};
use contracts::system::menu;

const USAGE: &str = "\
Usage:
  showroom nic <number>...                 decode dates of birth from NICs
  showroom menu <role>                     show the menu visible to a role
  showroom list <resource> [page]          list a resource (needs SHOWROOM_TOKEN)
  showroom report sales <from> <to>        sales report as CSV
  showroom report stock                    stock report as CSV
  showroom upload <customer-id> <file>     store a customer document

Resources: categories, models, stock, customers, couriers, transfers,
           payments, notes, settings, users";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    match command.as_str() {
        "nic" => decode_nics(&args[1..]),
        "menu" => print_menu(args.get(1).map(String::as_str).unwrap_or("cashier")),
        "list" => {
            let resource = args.get(1).context("list: resource name is required")?;
            let page = match args.get(2) {
                Some(p) => p.parse().context("list: page must be a number")?,
                None => 0,
            };
            list_resource(&authenticated_client().await?, resource, page).await
        }
        "report" => match args.get(1).map(String::as_str) {
            Some("sales") => {
                let (Some(from), Some(to)) = (args.get(2), args.get(3)) else {
                    anyhow::bail!("report sales: <from> and <to> dates are required");
                };
                let request = SalesReportRequest {
                    date_from: from.clone(),
                    date_to: to.clone(),
                    category_id: None,
                };
                let client = authenticated_client().await?;
                let report = p901_sales_report::api::sales_report(&client, &request).await?;
                p901_sales_report::export::write_csv(&report.rows, std::io::stdout())
            }
            Some("stock") => {
                let client = authenticated_client().await?;
                let rows = p902_stock_report::api::stock_report(&client).await?;
                p902_stock_report::export::write_csv(&rows, std::io::stdout())
            }
            _ => anyhow::bail!("report: expected 'sales' or 'stock'\n\n{}", USAGE),
        },
        "upload" => {
            let (Some(customer_id), Some(file)) = (args.get(1), args.get(2)) else {
                anyhow::bail!("upload: <customer-id> and <file> are required");
            };
            upload(customer_id, file).await
        }
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => anyhow::bail!("Unknown command '{}'\n\n{}", other, USAGE),
    }
}

fn decode_nics(numbers: &[String]) -> anyhow::Result<()> {
    for number in numbers {
        match nic::decode(number) {
            Ok(details) => println!(
                "{}\t{}\t{:?}\t{:?}",
                number, details.birth_date, details.sex, details.format
            ),
            Err(e) => {
                tracing::debug!("{}: {}", number, e);
                println!("{}\t-", number);
            }
        }
    }
    Ok(())
}

fn print_menu(role: &str) -> anyhow::Result<()> {
    let capabilities = Capabilities::for_role(Role::parse(role));
    for group in menu::visible_groups(&capabilities) {
        println!("{}", group.label);
        for item in group.items {
            println!("  {}", item.label);
        }
    }
    Ok(())
}

async fn authenticated_client() -> anyhow::Result<ApiClient> {
    let config = config::load_config()?;
    let client = ApiClient::from_config(&config.api)?;
    let token = std::env::var("SHOWROOM_TOKEN").context("SHOWROOM_TOKEN is not set")?;
    Ok(auth::api::restore_session(&client, &token).await?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn list_resource(client: &ApiClient, resource: &str, page: u32) -> anyhow::Result<()> {
    let page = PageRequest::new(page, 0);
    match resource {
        "categories" => print_json(&a001_category::api::list_categories(client).await?),
        "models" => print_json(&a002_bike_model::api::list_models(client, page).await?),
        "stock" => print_json(&a003_stock::api::list_stock(client, page).await?),
        "customers" => print_json(&a004_customer::api::list_customers(client, page).await?),
        "couriers" => print_json(&a005_courier::api::list_couriers(client, page).await?),
        "transfers" => print_json(&a006_transfer::api::list_transfers(client, page).await?),
        "payments" => print_json(&a007_payment::api::list_payments(client, page).await?),
        "notes" => print_json(&a008_dealer_consignment::api::list_notes(client, page).await?),
        "settings" => print_json(&a009_setting::api::list_settings(client).await?),
        "users" => print_json(&users::api::list_users(client).await?),
        other => anyhow::bail!("Unknown resource '{}'\n\n{}", other, USAGE),
    }
}

async fn upload(customer_id: &str, file: &str) -> anyhow::Result<()> {
    let customer_id: i64 = customer_id
        .parse()
        .context("upload: customer id must be a number")?;
    let path = std::path::Path::new(file);
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read {}", file))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");

    let config = config::load_config()?;
    let store = SqliteBlobStore::open(&config::get_blob_db_path(&config)).await?;
    let key =
        a004_customer::documents::upload_document(&store, Some(customer_id), file_name, bytes)
            .await?;
    println!("{}", key);
    Ok(())
}
