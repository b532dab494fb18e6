//! Authentication commands: login, register, logout, whoami

use clap::Args;
use zeroize::Zeroizing;

use super::CommandContext;
use crate::error::{PfmError, PfmResult};
use crate::session::Session;

/// Email and password for login or registration
#[derive(Args, Debug)]
pub struct Credentials {
    /// Account email
    pub email: String,

    /// Password; prompted for when omitted
    #[arg(long, env = "PFM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Credentials {
    /// Take the supplied password or prompt for one without echo
    fn password(self) -> PfmResult<(String, Zeroizing<String>)> {
        let password = match self.password {
            Some(password) => Zeroizing::new(password),
            None => Zeroizing::new(rpassword::prompt_password("Password: ")?),
        };
        if password.is_empty() {
            return Err(PfmError::Validation("Password is required".into()));
        }
        Ok((self.email, password))
    }
}

fn validate_email(email: &str) -> PfmResult<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(PfmError::Validation(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

pub async fn handle_login(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    credentials: Credentials,
) -> PfmResult<()> {
    let (email, password) = credentials.password()?;
    validate_email(&email)?;

    let scope = ctx.scope();
    let user = scope.run(session.login(&email, &password)).await?;
    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub async fn handle_register(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    name: String,
    credentials: Credentials,
) -> PfmResult<()> {
    if name.trim().is_empty() {
        return Err(PfmError::Validation("Name is required".into()));
    }
    let (email, password) = credentials.password()?;
    validate_email(&email)?;

    let scope = ctx.scope();
    let user = scope
        .run(session.register(&name, &email, &password))
        .await?;
    println!("Account created. Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub fn handle_logout(session: &mut Session) -> PfmResult<()> {
    if session.logout()? {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

pub async fn handle_whoami(session: &mut Session, ctx: &CommandContext<'_>) -> PfmResult<()> {
    let scope = ctx.scope();
    let user = scope.run(session.ensure_authenticated()).await?;

    println!("Name:          {}", user.name);
    println!("Email:         {}", user.email);
    println!("Currency:      {}", user.currency);
    println!(
        "Notifications: {}",
        if user.notifications { "on" } else { "off" }
    );
    Ok(())
}
