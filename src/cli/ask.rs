//! Advice request command handler.

use anyhow::Result;

use lukman::{LukmanClient, MedicalQuestion};

use super::render_advice;

/// Ask for medical advice and print the structured result.
pub(crate) async fn cmd_ask(
    client: &LukmanClient,
    question: String,
    age: Option<u32>,
    gender: Option<String>,
) -> Result<()> {
    let request = MedicalQuestion {
        question,
        age,
        gender,
    };
    let advice = client.get_medical_advice(&request).await?;

    render_advice(&advice.advice);
    println!();
    println!("{}", advice.disclaimer);
    Ok(())
}
