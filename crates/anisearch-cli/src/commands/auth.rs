use anyhow::{Result, bail};

use crate::bootstrap::AppBootstrap;

pub async fn login(app: &AppBootstrap, username: &str, password: &str) -> Result<()> {
    if !app.auth.login(username, password).await.is_success() {
        bail!("Login failed");
    }
    println!("Logged in as {}", username);
    Ok(())
}

pub async fn register(app: &AppBootstrap, username: &str, email: &str, password: &str) -> Result<()> {
    app.auth.register(username, email, password).await?;
    println!("Registered and logged in as {}", username);
    Ok(())
}

pub async fn logout(app: &AppBootstrap) {
    app.auth.logout().await;
    println!("Logged out");
}

pub async fn passwd(app: &AppBootstrap, old: &str, new: &str) -> Result<()> {
    if !app.auth.is_logged_in() {
        bail!("Not logged in");
    }
    app.auth.update_password(old, new).await?;
    println!("Password updated");
    Ok(())
}

pub fn whoami(app: &AppBootstrap) {
    match app.auth.session() {
        Some(session) => println!(
            "{} <{}> (id {})",
            session.username, session.email, session.user_id
        ),
        None => println!("Not logged in"),
    }
}
