use anyhow::{Context, Result, anyhow};
use briefing_client::models::BriefingCategory;
use briefing_client::{BriefingClient, ClientConfig, Endpoint, HttpMethod, RequestDescriptor};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "briefing")]
#[command(about = "Briefing API client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the method and path an endpoint resolves to
    Resolve {
        endpoint: EndpointKind,
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        member_id: Option<i64>,
        #[arg(short, long, default_value = "GET")]
        method: HttpMethod,
    },
    /// Fetch a member's scrapbook grouped by date
    Scrapbook {
        #[arg(long)]
        member_id: i64,
        /// Print records without date headers
        #[arg(long, conflicts_with = "json")]
        flat: bool,
        /// Print sections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the keyword briefings for a category
    Keywords {
        #[arg(short, long)]
        category: BriefingCategory,
        /// Defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EndpointKind {
    Root,
    Keywords,
    BriefingCard,
    Chattings,
    Scrap,
    FetchScrap,
    DeleteScrap,
}

impl EndpointKind {
    fn build(self, id: Option<i64>, member_id: Option<i64>) -> Result<Endpoint> {
        let require = |value: Option<i64>, flag: &str| {
            value.ok_or_else(|| anyhow!("--{} is required for this endpoint", flag))
        };

        Ok(match self {
            EndpointKind::Root => Endpoint::Root,
            EndpointKind::Keywords => Endpoint::Keywords,
            EndpointKind::BriefingCard => Endpoint::BriefingCard {
                id: require(id, "id")?,
            },
            EndpointKind::Chattings => Endpoint::chattings(id),
            EndpointKind::Scrap => Endpoint::Scrap,
            EndpointKind::FetchScrap => Endpoint::FetchScrap {
                member_id: require(member_id, "member-id")?,
            },
            EndpointKind::DeleteScrap => Endpoint::DeleteScrap {
                id: require(id, "id")?,
                member_id: require(member_id, "member-id")?,
            },
        })
    }
}

fn render_request(request: &RequestDescriptor) -> String {
    format!("{} /{}", request.method(), request.path())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("briefing_client=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            endpoint,
            id,
            member_id,
            method,
        } => {
            let request = endpoint.build(id, member_id)?.resolve(method)?;
            println!("{}", render_request(&request));
        }
        Commands::Scrapbook {
            member_id,
            flat,
            json,
        } => {
            let client = BriefingClient::new(ClientConfig::from_env()?);
            let sections = client
                .fetch_scrapbook(member_id)
                .await
                .with_context(|| format!("fetching scrapbook for member {}", member_id))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            } else if flat {
                for record in briefing_client::flatten(sections) {
                    println!("{} [{}] {} - {}", record.date, record.rank, record.title, record.subtitle);
                }
            } else {
                for section in sections {
                    println!("{}", section.date);
                    for record in &section.records {
                        println!("  [{}] {} - {}", record.rank, record.title, record.subtitle);
                    }
                }
            }
        }
        Commands::Keywords { category, date } => {
            let client = BriefingClient::new(ClientConfig::from_env()?);
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let keywords = client
                .fetch_keywords(date, category.keyword_type())
                .await
                .context("fetching keywords")?;

            println!("{} ({})", keywords.created_at, category.keyword_type());
            for briefing in keywords.briefings {
                println!("  {}. {} - {}", briefing.ranks, briefing.title, briefing.subtitle);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_builds_with_its_flags() {
        let cases = [
            (EndpointKind::Root, Endpoint::Root),
            (EndpointKind::Keywords, Endpoint::Keywords),
            (EndpointKind::BriefingCard, Endpoint::BriefingCard { id: 7 }),
            (EndpointKind::Chattings, Endpoint::Chatting { id: 7 }),
            (EndpointKind::Scrap, Endpoint::Scrap),
            (EndpointKind::FetchScrap, Endpoint::FetchScrap { member_id: 3 }),
            (
                EndpointKind::DeleteScrap,
                Endpoint::DeleteScrap { id: 7, member_id: 3 },
            ),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.build(Some(7), Some(3)).unwrap(), expected);
        }
    }

    #[test]
    fn chattings_id_is_optional() {
        assert_eq!(EndpointKind::Chattings.build(None, None).unwrap(), Endpoint::Chattings);
        assert_eq!(
            EndpointKind::Chattings.build(Some(5), None).unwrap(),
            Endpoint::Chatting { id: 5 }
        );
    }

    #[test]
    fn missing_flags_are_errors() {
        let err = EndpointKind::BriefingCard.build(None, Some(3)).unwrap_err();
        assert!(err.to_string().contains("--id"));

        let err = EndpointKind::FetchScrap.build(Some(7), None).unwrap_err();
        assert!(err.to_string().contains("--member-id"));

        assert!(EndpointKind::DeleteScrap.build(Some(7), None).is_err());
        assert!(EndpointKind::DeleteScrap.build(None, Some(3)).is_err());
    }

    #[test]
    fn resolve_command_parses_and_renders() {
        let cli = Cli::try_parse_from([
            "briefing",
            "resolve",
            "delete-scrap",
            "--id",
            "7",
            "--member-id",
            "3",
            "--method",
            "delete",
        ])
        .unwrap();

        let Commands::Resolve {
            endpoint,
            id,
            member_id,
            method,
        } = cli.command
        else {
            panic!("expected resolve command");
        };
        let request = endpoint.build(id, member_id).unwrap().resolve(method).unwrap();
        assert_eq!(render_request(&request), "DELETE /scraps/briefings/7/members/3");
    }

    #[test]
    fn resolve_defaults_to_get() {
        let cli = Cli::try_parse_from(["briefing", "resolve", "root"]).unwrap();
        let Commands::Resolve { endpoint, method, .. } = cli.command else {
            panic!("expected resolve command");
        };
        assert_eq!(method, HttpMethod::Get);
        let request = endpoint.build(None, None).unwrap().resolve(method).unwrap();
        assert_eq!(render_request(&request), "GET /");
    }

    #[test]
    fn scrapbook_flat_and_json_conflict() {
        assert!(
            Cli::try_parse_from(["briefing", "scrapbook", "--member-id", "1", "--flat", "--json"])
                .is_err()
        );
    }
}
