//! Profile commands.

use anyhow::{Context, Result};
use conecta_core::config::Config;
use conecta_core::models::ProfilePatch;

#[derive(Debug, clap::Subcommand)]
pub enum ProfileCommand {
    /// Show your profile
    Show,
    /// Update one profile field
    Set {
        #[arg(value_enum)]
        field: ProfileField,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
    Bio,
    ImageUrl,
    JobTitle,
    Company,
}

pub async fn run(config: &Config, command: ProfileCommand) -> Result<()> {
    let (api, user_id) = super::authenticated(config).await?;

    match command {
        ProfileCommand::Show => {
            let profile = api
                .fetch_profile(&user_id)
                .await
                .context("Erro ao obter perfil do usuário")?;
            println!("Nome:     {}", profile.user_name);
            println!("Email:    {}", profile.email);
            println!("Telefone: {}", profile.phone_number);
            println!("Endereço: {}", profile.address);
            println!("Cargo:    {}", profile.job_title);
            println!("Empresa:  {}", profile.company);
            if !profile.bio.is_empty() {
                println!("Bio:      {}", profile.bio);
            }
            Ok(())
        }
        ProfileCommand::Set { field, value } => {
            let mut patch = ProfilePatch::default();
            match field {
                ProfileField::Name => patch.user_name = Some(value),
                ProfileField::Email => patch.email = Some(value),
                ProfileField::Phone => patch.phone_number = Some(value),
                ProfileField::Address => patch.address = Some(value),
                ProfileField::Bio => patch.bio = Some(value),
                ProfileField::ImageUrl => patch.image_url = Some(value),
                ProfileField::JobTitle => patch.job_title = Some(value),
                ProfileField::Company => patch.company = Some(value),
            }
            api.update_profile(&user_id, &patch)
                .await
                .context("Erro ao atualizar perfil")?;
            println!("Perfil atualizado.");
            Ok(())
        }
    }
}
