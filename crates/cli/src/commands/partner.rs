use anyhow::Result;
use leadengine_storage::SiteStore as _;

use crate::open_storage;

pub(crate) async fn run(database_url: Option<&str>, slug: &str, email: Option<&str>) -> Result<()> {
    let storage = open_storage(database_url).await?;
    let email = email.map(str::trim).filter(|e| !e.is_empty());
    if !storage.set_partner(slug, email).await? {
        anyhow::bail!("no site with slug '{slug}'");
    }
    match email {
        Some(email) => println!("Partner for {slug} set to {email}"),
        None => println!("Partner for {slug} cleared"),
    }
    Ok(())
}
