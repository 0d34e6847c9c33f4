// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP plumbing for remote catalogs, images and the CV asset.

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// Builds the client used for every outgoing request.
pub fn client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Downloads `url` fully into memory.
///
/// Transport failures are [`Error::Http`]; a non-success answer is
/// [`Error::Status`].
pub async fn get_bytes(url: &str) -> Result<Vec<u8>> {
    let response = client()?.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_url_is_an_http_error() {
        let result = get_bytes("not a url").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[test]
    fn client_builds() {
        assert!(client().is_ok());
    }
}
