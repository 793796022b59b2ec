//! Sign-in / sign-out commands.

use super::Context;
use crate::analytics;

/// Record a signed-in user locally.
pub async fn login(ctx: &Context, email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let session = ctx.session_store().sign_in(email)?;
    println!("Signed in as {}.", session.email);

    analytics::track(&ctx.api, Some(&session), "login", None, None).await;
    Ok(())
}

/// Drop the local session marker.
pub async fn logout(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.session_store();
    let session = store.current().unwrap_or(None);
    store.sign_out()?;
    println!("Signed out.");

    analytics::track(&ctx.api, session.as_ref(), "logout", None, None).await;
    Ok(())
}
