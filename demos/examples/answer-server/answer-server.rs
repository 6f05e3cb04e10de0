use std::io::Write;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use clap::Parser;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use log::{debug, info, warn};

use signal::message::PC_ID_FIELD;
use signal::{AnswerResponse, OfferRequest, RTCSdpType, RTCSessionDescription};

static PEER_CONNECTION_COUNT: AtomicUsize = AtomicUsize::new(0);

#[derive(Parser)]
#[command(name = "answer-server")]
#[command(author = "Rusty Rain <y@liu.mx>")]
#[command(version = "0.0.0")]
#[command(about = "Answers offers POSTed to /offer by echoing them back", long_about = None)]
struct Cli {
    #[arg(short, long)]
    debug: bool,
    #[arg(short, long, default_value_t = format!("INFO"))]
    log_level: String,
    #[arg(long, default_value_t = format!("127.0.0.1"))]
    host: String,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn bad_request(msg: String) -> Response<Body> {
    warn!("{msg}");
    let mut response = Response::new(Body::from(msg));
    *response.status_mut() = StatusCode::BAD_REQUEST;
    response
}

// The answer mirrors the offer with the DTLS role settled on our side.
fn echo_answer(offer: &RTCSessionDescription) -> RTCSessionDescription {
    RTCSessionDescription::answer(offer.sdp.replace("a=setup:actpass", "a=setup:active"))
}

async fn remote_handler(req: Request<Body>) -> Result<Response<Body>, hyper::Error> {
    match (req.method(), req.uri().path()) {
        (&Method::POST, "/offer") => {
            let body = hyper::body::to_bytes(req.into_body()).await?;
            let offer = match serde_json::from_slice::<OfferRequest>(&body) {
                Ok(offer) => offer,
                Err(err) => return Ok(bad_request(format!("Failed to parse offer: {err}"))),
            };
            if offer.description.sdp_type != RTCSdpType::Offer {
                return Ok(bad_request(format!(
                    "Expected an offer, got {}",
                    offer.description.sdp_type
                )));
            }

            let pc_id = format!(
                "PeerConnection({})",
                PEER_CONNECTION_COUNT.fetch_add(1, Ordering::SeqCst)
            );
            for (key, value) in &offer.extra {
                info!("{pc_id} {key}: {value}");
            }
            debug!("{pc_id} offer: {}", offer.description);

            let answer = AnswerResponse::new(echo_answer(&offer.description))
                .with_field(PC_ID_FIELD, pc_id.as_str());
            let body = match serde_json::to_string(&answer) {
                Ok(body) => body,
                Err(err) => {
                    let mut response = Response::new(Body::from(err.to_string()));
                    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    return Ok(response);
                }
            };

            let mut response = Response::new(Body::from(body));
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Ok(response)
        }
        _ => {
            let mut not_found = Response::default();
            *not_found.status_mut() = StatusCode::NOT_FOUND;
            Ok(not_found)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = log::LevelFilter::from_str(&cli.log_level)?;
    if cli.debug {
        env_logger::Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{}:{} [{}] {} - {}",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.level(),
                    chrono::Local::now().format("%H:%M:%S.%6f"),
                    record.args()
                )
            })
            .filter(None, log_level)
            .init();
    }

    let addr = SocketAddr::from_str(&format!("{}:{}", cli.host, cli.port))?;
    let make_svc =
        make_service_fn(|_| async { Ok::<_, hyper::Error>(service_fn(remote_handler)) });
    let server = Server::try_bind(&addr)?.serve(make_svc);

    println!("Listening on http://{}/offer", server.local_addr());
    server.await?;

    Ok(())
}
