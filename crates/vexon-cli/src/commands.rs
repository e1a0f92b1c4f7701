//! Command Parsing & Dispatch

use anyhow::{bail, Context};
use serde::Serialize;

use vexon_client::{ApiClient, ApiResponse, CallbackParams, OAuthProvider};
use vexon_core::{CardDetails, ContactForm, SignupForm, Transcript};

/// Usage text printed on `help` or bad input
pub const USAGE: &str = "\
Usage: vexon <command> [args] [--captcha <token>]

Commands:
  login <email> <password>                     Sign in and store the session
  signup <username> <email> <password> [first] [last]
                                               Register and store the session
  logout                                       Forget the stored session
  whoami                                       Show the stored session user
  forgot-password <email>                      Request a password reset mail
  plans                                        List subscription plans
  subscribe <plan> <card> <mm/yy> <cvv> <holder...>
                                               Change plan with a test card
  contact <name> <email> <message...>          Send the contact form
  map-pin <address...>                         Geocode an address
  chat <message...>                            Ask the support assistant
  generate <prompt...>                         Run a Neural Lab generation
  oauth-url <google|github>                    Print the OAuth sign-in URL
  oauth-callback <google|github> <token>       Exchange an OAuth token
";

/// A parsed command line
#[derive(Debug, PartialEq)]
pub enum Command {
    Login {
        email: String,
        password: String,
        captcha: Option<String>,
    },
    Signup {
        username: String,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        captcha: Option<String>,
    },
    Logout,
    Whoami,
    ForgotPassword { email: String },
    Plans,
    Subscribe { plan: String, card: CardDetails },
    Contact {
        name: String,
        email: String,
        message: String,
        captcha: Option<String>,
    },
    MapPin { address: String },
    Chat { message: String },
    Generate { prompt: String },
    OAuthUrl { provider: OAuthProvider },
    OAuthCallback { provider: String, token: String },
    Help,
}

/// Pull `--captcha <token>` out of the argument list
fn take_captcha(args: &mut Vec<String>) -> anyhow::Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == "--captcha") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        bail!("--captcha needs a token");
    }
    let token = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(token))
}

fn joined(rest: &[String], what: &str) -> anyhow::Result<String> {
    if rest.is_empty() {
        bail!("missing {what}");
    }
    Ok(rest.join(" "))
}

impl Command {
    /// Parse the arguments after the program name
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut args = args.to_vec();
        let captcha = take_captcha(&mut args)?;
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        let command = match (name.as_str(), rest) {
            ("login", [email, password]) => Command::Login {
                email: email.clone(),
                password: password.clone(),
                captcha,
            },
            ("signup", [username, email, password, names @ ..]) if names.len() <= 2 => {
                Command::Signup {
                    username: username.clone(),
                    email: email.clone(),
                    password: password.clone(),
                    first_name: names.first().cloned().unwrap_or_default(),
                    last_name: names.get(1).cloned().unwrap_or_default(),
                    captcha,
                }
            }
            ("logout", []) => Command::Logout,
            ("whoami", []) => Command::Whoami,
            ("forgot-password", [email]) => Command::ForgotPassword {
                email: email.clone(),
            },
            ("plans", []) => Command::Plans,
            ("subscribe", [plan, number, expiry, cvv, holder @ ..]) => {
                let (month, year) = expiry
                    .split_once('/')
                    .with_context(|| format!("expiry must be mm/yy, got {expiry}"))?;
                Command::Subscribe {
                    plan: plan.clone(),
                    card: CardDetails {
                        card_number: vexon_core::format_card_number(number),
                        expiry_month: month.to_string(),
                        expiry_year: year.to_string(),
                        cvv: cvv.clone(),
                        card_holder: joined(holder, "card holder")?,
                    },
                }
            }
            ("contact", [name, email, message @ ..]) => Command::Contact {
                name: name.clone(),
                email: email.clone(),
                message: joined(message, "message")?,
                captcha,
            },
            ("map-pin", address) => Command::MapPin {
                address: joined(address, "address")?,
            },
            ("chat", message) => Command::Chat {
                message: joined(message, "message")?,
            },
            ("generate", prompt) => Command::Generate {
                prompt: joined(prompt, "prompt")?,
            },
            ("oauth-url", [provider]) => Command::OAuthUrl {
                provider: provider.parse().map_err(|e| anyhow::anyhow!("{e}"))?,
            },
            ("oauth-callback", [provider, token]) => Command::OAuthCallback {
                provider: provider.clone(),
                token: token.clone(),
            },
            ("help" | "--help" | "-h", []) => Command::Help,
            (other, _) => bail!("unknown command or wrong arguments: {other}"),
        };

        Ok(command)
    }
}

/// What a command produced: an envelope to print, or plain text
pub enum Outcome {
    Envelope { json: String, success: bool },
    Text(String),
}

fn envelope<T: Serialize>(resp: &ApiResponse<T>) -> anyhow::Result<Outcome> {
    Ok(Outcome::Envelope {
        json: serde_json::to_string_pretty(resp)?,
        success: resp.is_success(),
    })
}

/// Run one command against the client
pub async fn run(client: &ApiClient, command: Command) -> anyhow::Result<Outcome> {
    match command {
        Command::Login {
            email,
            password,
            captcha,
        } => envelope(&client.login(&email, &password, captcha.as_deref()).await),
        Command::Signup {
            username,
            email,
            password,
            first_name,
            last_name,
            captcha,
        } => {
            let form = SignupForm {
                username,
                email,
                first_name,
                last_name,
                password,
            };
            envelope(&client.signup(&form, captcha.as_deref()).await)
        }
        Command::Logout => envelope(&client.logout()),
        Command::Whoami => match client.get_current_user() {
            Some(session) => Ok(Outcome::Text(format!(
                "{} <{}> plan: {}",
                session.user.display_name(),
                session.user.email,
                session.user.plan_label()
            ))),
            None => Ok(Outcome::Text("Not signed in".into())),
        },
        Command::ForgotPassword { email } => envelope(&client.forgot_password(&email).await),
        Command::Plans => envelope(&client.get_plans().await),
        Command::Subscribe { plan, card } => {
            if !card.is_accepted_test_card() {
                tracing::warn!(?card, "Card rejected before submission");
                return envelope(&ApiResponse::<()>::failure(
                    "Card pattern unrecognized by neural core.",
                    422,
                ));
            }
            envelope(&client.subscribe(&plan, &card).await)
        }
        Command::Contact {
            name,
            email,
            message,
            captcha,
        } => {
            let form = ContactForm {
                name,
                email,
                message,
                captcha_token: captcha,
            };
            envelope(&client.submit_contact_form(&form).await)
        }
        Command::MapPin { address } => envelope(&client.get_map_pin(&address).await),
        Command::Chat { message } => {
            let mut transcript = Transcript::new();
            let Some(history) = transcript.begin_turn(&message) else {
                bail!("message is blank");
            };
            let resp = client.generate_chat(&history).await;
            transcript.finish_turn(resp.success_data().map(|r| r.response.clone()));
            let reply = transcript
                .messages()
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(Outcome::Text(reply))
        }
        Command::Generate { prompt } => envelope(&client.generate_ai(&prompt).await),
        Command::OAuthUrl { provider } => Ok(Outcome::Text(client.oauth_redirect_url(provider))),
        Command::OAuthCallback { provider, token } => {
            let params = CallbackParams {
                token: Some(token),
                provider: Some(provider),
                error: None,
            };
            envelope(&client.complete_oauth(params).await)
        }
        Command::Help => Ok(Outcome::Text(USAGE.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_login_with_captcha() {
        let cmd = Command::parse(&args("login a@b.com pw --captcha tok")).unwrap();
        assert_eq!(
            cmd,
            Command::Login {
                email: "a@b.com".into(),
                password: "pw".into(),
                captcha: Some("tok".into()),
            }
        );
    }

    #[test]
    fn test_parse_signup_optional_names() {
        let Command::Signup { first_name, last_name, .. } =
            Command::parse(&args("signup neo a@b.com pw Thomas")).unwrap()
        else {
            panic!("expected signup");
        };
        assert_eq!(first_name, "Thomas");
        assert_eq!(last_name, "");
    }

    #[test]
    fn test_parse_subscribe() {
        let Command::Subscribe { plan, card } =
            Command::parse(&args("subscribe pro 4242424242424242 12/30 123 Thomas Anderson"))
                .unwrap()
        else {
            panic!("expected subscribe");
        };
        assert_eq!(plan, "pro");
        assert_eq!(card.card_number, "4242 4242 4242 4242");
        assert_eq!(card.expiry_month, "12");
        assert_eq!(card.expiry_year, "30");
        assert_eq!(card.card_holder, "Thomas Anderson");
    }

    #[test]
    fn test_parse_joins_free_text() {
        assert_eq!(
            Command::parse(&args("map-pin SF-01 Base, California")).unwrap(),
            Command::MapPin {
                address: "SF-01 Base, California".into()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse(&args("login only-email")).is_err());
        assert!(Command::parse(&args("login a b --captcha")).is_err());
        assert!(Command::parse(&args("subscribe pro 4242 1230 123 Neo")).is_err());
        assert!(Command::parse(&args("oauth-url myspace")).is_err());
        assert!(Command::parse(&args("teleport")).is_err());
    }

    #[test]
    fn test_parse_empty_is_help() {
        assert_eq!(Command::parse(&[]).unwrap(), Command::Help);
    }

    mod dispatch {
        use super::*;
        use std::sync::Arc;

        use serde_json::json;
        use vexon_client::mock::MockTransport;
        use vexon_client::{ClientConfig, Method};
        use vexon_core::MemorySessionStore;

        fn client(transport: Arc<MockTransport>) -> ApiClient {
            ApiClient::new(
                ClientConfig::default(),
                transport,
                Arc::new(MemorySessionStore::new()),
            )
        }

        #[tokio::test]
        async fn test_unknown_card_never_reaches_backend() {
            let transport = Arc::new(MockTransport::new());
            let cmd = Command::parse(&args("subscribe pro 5555555555554444 01/29 999 Neo")).unwrap();

            let Outcome::Envelope { json, success } = run(&client(transport.clone()), cmd).await.unwrap()
            else {
                panic!("expected envelope");
            };
            assert!(!success);
            assert!(json.contains("Card pattern unrecognized"));
            assert!(transport.requests().is_empty());
        }

        #[tokio::test]
        async fn test_chat_prints_reply_or_fallback() {
            let transport = Arc::new(MockTransport::new());
            transport.reply(
                Method::Post,
                "/ai/chat",
                json!({"status": "success", "data": {"response": "Uplink stable."}}),
            );
            let client = client(transport);

            let Outcome::Text(reply) = run(&client, Command::Chat { message: "status?".into() })
                .await
                .unwrap()
            else {
                panic!("expected text");
            };
            assert_eq!(reply, "Uplink stable.");

            let Outcome::Text(reply) = run(&client, Command::Chat { message: "again".into() })
                .await
                .unwrap()
            else {
                panic!("expected text");
            };
            assert_eq!(reply, vexon_core::chat::REPLY_REJECTED);
        }

        #[tokio::test]
        async fn test_whoami_without_session() {
            let client = client(Arc::new(MockTransport::new()));
            let Outcome::Text(text) = run(&client, Command::Whoami).await.unwrap() else {
                panic!("expected text");
            };
            assert_eq!(text, "Not signed in");
        }
    }
}
