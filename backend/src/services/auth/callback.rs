use super::OAuthSetup;
use actix_web::{web, HttpResponse};
use log::info;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
}

pub async fn process(query: web::Query<CallbackQuery>, setup: web::Data<OAuthSetup>) -> HttpResponse {
    let Some(code) = query.into_inner().code.filter(|c| !c.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({ "error": "No code provided" }));
    };
    info!("Authorization code received, rendering exchange instructions");

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&escape_html(&code), &setup))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `code` must already be escaped.
fn render_page(code: &str, setup: &OAuthSetup) -> String {
    let accounts = escape_html(&setup.accounts_url);
    let redirect = escape_html(&setup.redirect_uri);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Authorization Code</title>
    <style>
      body {{ font-family: Arial, sans-serif; max-width: 600px; margin: 40px auto; padding: 20px; line-height: 1.6; }}
      .code-box {{ background: #f5f5f5; padding: 15px; border-radius: 4px; word-break: break-all; margin: 20px 0; }}
      .instructions {{ color: #666; }}
      pre {{ background: #f5f5f5; padding: 15px; border-radius: 4px; overflow-x: auto; }}
    </style>
  </head>
  <body>
    <h1>Authorization Code Received</h1>
    <div class="code-box">
      <strong>Your authorization code:</strong><br>
      {code}
    </div>
    <div class="instructions">
      <p>Please use this code to get your refresh token. The code will expire in a few minutes.</p>
      <p>Use this code in the curl command to get your refresh token:</p>
      <pre>curl -X POST "{accounts}/oauth/v2/token" \
  -d "grant_type=authorization_code" \
  -d "client_id=YOUR_CLIENT_ID" \
  -d "client_secret=YOUR_CLIENT_SECRET" \
  -d "code={code}" \
  -d "redirect_uri={redirect}"</pre>
    </div>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::super::{configure_routes, OAuthSetup};
    use super::escape_html;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(OAuthSetup::new(
                        "https://accounts.zoho.eu/",
                        "http://localhost:8080",
                    )))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn redirect_uri_points_back_at_callback() {
        let setup = OAuthSetup::new("https://accounts.zoho.eu", "https://form.example.com/");
        assert_eq!(setup.redirect_uri, "https://form.example.com/api/auth/callback");
    }

    #[actix_web::test]
    async fn markup_characters_are_escaped() {
        assert_eq!(
            escape_html("<b>\"x\" & 'y'</b>"),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
    }

    #[actix_web::test]
    async fn page_shows_code_and_exchange_command() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/auth/callback?code=1000.abc123")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("1000.abc123"));
        assert!(body.contains("curl -X POST \"https://accounts.zoho.eu/oauth/v2/token\""));
        assert!(body.contains("-d \"code=1000.abc123\""));
        assert!(body.contains("redirect_uri=http://localhost:8080/api/auth/callback"));
    }

    #[actix_web::test]
    async fn injected_markup_is_not_rendered() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/auth/callback?code=%3Cscript%3Ealert(1)%3C%2Fscript%3E")
            .to_request();
        let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[actix_web::test]
    async fn missing_code_is_bad_request() {
        let app = app!();
        for uri in ["/api/auth/callback", "/api/auth/callback?code="] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "No code provided");
        }
    }
}
