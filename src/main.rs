use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use color_eyre::eyre::Result;
use dotenv::dotenv;

use citaflow_client::ApiClient;
use citaflow_client::auth::AuthStore;
use citaflow_client::config::ClientConfig;
use citaflow_ui::cache::QueryCache;
use citaflow_ui::cancel::{CancelFlow, CancelState};
use citaflow_ui::wizard::{BookingWizard, ContactInfo, WizardStep};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let client = Arc::new(ApiClient::new(&config, Arc::new(AuthStore::new()))?);
    let cache = Arc::new(QueryCache::new());

    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(cmd), Some(token)) if cmd == "cancel" => run_cancel(client, &token).await,
        (Some(business_id), None) => run_wizard(client, cache, &business_id).await,
        _ => {
            eprintln!("Usage: citaflow <business-id> | citaflow cancel <token>");
            Ok(())
        }
    }
}

/// Walks through the same five steps the hosted booking page has.
async fn run_wizard(
    client: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    business_id: &str,
) -> Result<()> {
    let today = Local::now().date_naive();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let mut wizard = BookingWizard::new(business_id, today, client.clone(), cache.clone());

        let services = wizard.load_services().await?;
        if services.is_empty() {
            println!("This business has no bookable services.");
            return Ok(());
        }
        println!("Services:");
        for (index, service) in services.iter().enumerate() {
            println!(
                "  {}. {} ({} min, {:.2})",
                index + 1,
                service.name,
                service.duration,
                service.price
            );
        }
        let pick = prompt_index(&mut input, "Service", services.len())?;
        wizard.select_service(services[pick].id.clone());

        let employees = wizard.load_employees().await?;
        if employees.is_empty() {
            println!("This business has no employees to book with.");
            return Ok(());
        }
        println!("Employees:");
        for (index, employee) in employees.iter().enumerate() {
            println!("  {}. {}", index + 1, employee.name);
        }
        let pick = prompt_index(&mut input, "Employee", employees.len())?;
        wizard.select_employee(employees[pick].id.clone());

        let slot = loop {
            let date = prompt_date(&mut input, today)?;
            wizard.set_date(date);

            let slots = wizard.load_availability().await?;
            if slots.is_empty() {
                println!("No open slots on {date}, try another day.");
                continue;
            }
            println!("Open slots on {date}:");
            for (index, slot) in slots.iter().enumerate() {
                println!("  {}. {}", index + 1, slot);
            }
            let pick = prompt_index(&mut input, "Slot", slots.len())?;
            break slots[pick].clone();
        };
        wizard.select_slot(slot);

        wizard.set_contact(ContactInfo {
            name: prompt_line(&mut input, "Your name")?,
            email: prompt_line(&mut input, "Email")?,
            phone: prompt_line(&mut input, "Phone")?,
            notes: prompt_line(&mut input, "Notes (optional)")?,
        });

        if let Err(err) = wizard.submit().await {
            println!("Booking failed: {}", err.user_message());
            return Ok(());
        }

        if wizard.step() == WizardStep::Confirmed {
            if let Some(appointment) = wizard.confirmed() {
                println!(
                    "Booked: {} with {} at {}",
                    appointment.service.name,
                    appointment.employee.name,
                    appointment.start_time.format("%Y-%m-%d %H:%M")
                );
            }
        }

        let again = prompt_line(&mut input, "Reserve another? [y/N]")?;
        if !again.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

async fn run_cancel(client: Arc<ApiClient>, token: &str) -> Result<()> {
    let mut flow = CancelFlow::new(token, client);
    let _ = flow.run().await;
    match flow.state() {
        CancelState::Cancelled(_) => {
            if let Some((service, start)) = flow.summary() {
                println!("Cancelled: {service} at {start}");
            }
        }
        CancelState::Failed(message) => println!("Could not cancel: {message}"),
        _ => {}
    }
    Ok(())
}

fn prompt_line(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_index(input: &mut impl BufRead, label: &str, len: usize) -> Result<usize> {
    loop {
        let raw = prompt_line(input, label)?;
        match raw.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(n - 1),
            _ => println!("Enter a number between 1 and {len}."),
        }
    }
}

fn prompt_date(input: &mut impl BufRead, default: NaiveDate) -> Result<NaiveDate> {
    loop {
        let raw = prompt_line(input, &format!("Date [YYYY-MM-DD, default {default}]"))?;
        if raw.is_empty() {
            return Ok(default);
        }
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("Dates look like 2025-11-20."),
        }
    }
}
