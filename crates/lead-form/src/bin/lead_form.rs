//! Interactive terminal form for the LeadGen email assistant.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use lead_form::{ApiClient, FormState, LeadForm};

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(label: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{} [y/N]", label))?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let client = ApiClient::from_env()?;
    let mut form = LeadForm::new(Arc::new(client));

    println!("LeadGen Email Assistant");
    println!("=======================");

    loop {
        println!("\nInput Lead Details");
        let fields = form.fields_mut();
        fields.company_name = prompt("Company Name")?;
        fields.contact_name = prompt("Contact Name")?;
        fields.industry = prompt("Industry")?;
        fields.purpose = prompt("Email Purpose")?;

        match form.generate().await {
            Ok(draft) => {
                println!("\nGenerated Template");
                println!("Subject: {}", draft.subject);
                println!("Body:\n{}", draft.body);
            }
            Err(err) => {
                eprintln!("Error generating template: {}", err);
                if !confirm("Try again?")? {
                    break;
                }
                continue;
            }
        }

        if confirm("Save lead and template?")? {
            match form.save().await {
                Ok(ids) => {
                    println!(
                        "Lead and Template saved successfully! Lead ID: {}, Template ID: {}",
                        ids.lead_id, ids.template_id
                    );
                }
                Err(err) => {
                    eprintln!("Error saving lead or template: {}", err);
                }
            }
        }

        if matches!(form.state(), FormState::Generated(_) | FormState::Saved { .. })
            && !confirm("Generate another?")?
        {
            break;
        }
    }

    Ok(())
}
