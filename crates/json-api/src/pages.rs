//! Form page handler.

use salvo::prelude::*;

const INDEX_HTML: &str = include_str!("pages/index.html");

/// Serve the name-change form.
///
/// Purely presentational; the page talks to the JSON endpoint like any
/// other caller would.
#[salvo::handler]
pub(crate) async fn index(res: &mut Response) {
    res.render(Text::Html(INDEX_HTML));
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_index_serves_the_form() -> TestResult {
        let router = Router::new().push(Router::new().get(index));

        let mut res = TestClient::get("http://example.com/")
            .send(&Service::new(router))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.contains("<form"));
        assert!(body.contains("/api/change-name"));

        Ok(())
    }
}
