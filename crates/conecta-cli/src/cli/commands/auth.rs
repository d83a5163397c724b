//! Login, logout, and registration commands.

use anyhow::{Context, Result, bail};
use conecta_core::config::Config;
use conecta_core::models::NewUser;
use conecta_core::session_store::SessionStore;

pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    let (api, jar) = super::client_with_jar(config)?;
    api.login(email, password)
        .await
        .context("Falha no login; verifique seus dados e tente novamente")?;

    SessionStore::capture_from_jar(&jar, api.base_url()).save()?;
    println!("Login realizado com sucesso.");
    Ok(())
}

pub async fn logout(config: &Config) -> Result<()> {
    if SessionStore::load().is_empty() {
        println!("Você não está logado.");
        return Ok(());
    }

    let (api, _jar) = super::client_with_jar(config)?;
    match api.logout().await {
        Ok(()) => {
            SessionStore::clear()?;
            println!("Sessão encerrada.");
            Ok(())
        }
        Err(error) => {
            tracing::warn!("logout failed: {error:#}");
            bail!("Erro ao sair da sessão!");
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub address: String,
    #[arg(long, default_value = "")]
    pub job_title: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long)]
    pub password: String,
    /// Repeat the password
    #[arg(long)]
    pub confirm_password: String,
}

pub async fn register(config: &Config, args: RegisterArgs) -> Result<()> {
    if args.password != args.confirm_password {
        bail!("As senhas não coincidem. Por favor, tente novamente.");
    }

    let (api, _jar) = super::client_with_jar(config)?;
    let user = NewUser {
        user_name: args.name,
        email: args.email,
        phone_number: args.phone,
        address: args.address,
        job_title: args.job_title,
        company: args.company,
        password: args.password,
    };
    api.register(&user).await.context("Erro ao cadastrar usuário")?;
    println!("Usuário cadastrado com sucesso!");
    Ok(())
}
