use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use rtc::configuration::RTCConfigurationBuilder;
use rtc::configuration::media_constraints::{MediaConstraints, VideoConstraint};
use rtc::negotiator::Negotiator;
use rtc::negotiator::event::NegotiationEvent;
use rtc::peer_connection::PeerConnection;
use rtc::peer_connection::event::RTCPeerConnectionEvent;
use rtc::peer_connection::state::{
    RTCIceConnectionState, RTCIceGatheringState, RTCSignalingState,
};
use sdp::MediaKind;
use shared::error::Error;
use signal::{HttpSignaler, RTCSdpType, RTCSessionDescription};

#[derive(Parser)]
#[command(name = "offer-client")]
#[command(author = "Rusty Rain <y@liu.mx>")]
#[command(version = "0.0.0")]
#[command(about = "Pins audio/video codecs in an offer and exchanges it with an HTTP answerer", long_about = None)]
struct Cli {
    #[arg(short, long)]
    debug: bool,
    #[arg(short, long, default_value_t = format!("INFO"))]
    log_level: String,
    #[arg(long, default_value_t = format!("http://127.0.0.1:8080/offer"))]
    server: String,
    /// File holding the base64 encoded offer; read from stdin when empty.
    #[arg(long, default_value_t = format!(""))]
    offer_file: String,
    #[arg(long, default_value_t = format!("default"))]
    audio_codec: String,
    #[arg(long, default_value_t = format!("default"))]
    video_codec: String,
    #[arg(long, default_value_t = format!("none"))]
    video_transform: String,
    #[arg(long)]
    use_stun: bool,
    #[arg(long)]
    use_audio: bool,
    #[arg(long)]
    use_video: bool,
    /// Capture resolution such as 640x480; empty keeps the device default.
    #[arg(long, default_value_t = format!(""))]
    video_resolution: String,
    #[arg(long)]
    require_codec_match: bool,
}

/// Peer connection replaying an offer produced elsewhere, e.g. pasted from
/// a browser. The offer already carries its candidates, so gathering
/// completes as soon as the local description is set.
struct PreparedOfferConnection {
    offer: RTCSessionDescription,
    local: Option<RTCSessionDescription>,
    remote: Option<RTCSessionDescription>,

    ice_gathering_state: RTCIceGatheringState,
    ice_connection_state: RTCIceConnectionState,
    signaling_state: RTCSignalingState,
    events: VecDeque<RTCPeerConnectionEvent>,
}

impl PreparedOfferConnection {
    fn new(offer: RTCSessionDescription) -> Result<Self, Error> {
        if offer.sdp_type != RTCSdpType::Offer {
            return Err(Error::ErrPeerConnSDPTypeInvalidValue);
        }

        Ok(PreparedOfferConnection {
            offer,
            local: None,
            remote: None,

            ice_gathering_state: RTCIceGatheringState::New,
            ice_connection_state: RTCIceConnectionState::New,
            signaling_state: RTCSignalingState::Stable,
            events: VecDeque::new(),
        })
    }

    fn set_signaling_state(&mut self, state: RTCSignalingState) {
        self.signaling_state = state;
        self.events
            .push_back(RTCPeerConnectionEvent::OnSignalingStateChangeEvent(state));
    }
}

impl PeerConnection for PreparedOfferConnection {
    async fn acquire_media(&mut self, constraints: &MediaConstraints) -> Result<(), Error> {
        info!("offer was captured with {constraints}");
        Ok(())
    }

    fn create_offer(&mut self) -> Result<RTCSessionDescription, Error> {
        Ok(self.offer.clone())
    }

    fn set_local_description(&mut self, desc: RTCSessionDescription) -> Result<(), Error> {
        if self.signaling_state != RTCSignalingState::Stable {
            return Err(Error::ErrPeerConnStateChangeInvalid);
        }
        self.local = Some(desc);
        self.set_signaling_state(RTCSignalingState::HaveLocalOffer);
        self.events.extend([
            RTCPeerConnectionEvent::OnIceGatheringStateChangeEvent(RTCIceGatheringState::Gathering),
            RTCPeerConnectionEvent::OnIceGatheringStateChangeEvent(RTCIceGatheringState::Complete),
        ]);
        Ok(())
    }

    fn local_description(&self) -> Option<&RTCSessionDescription> {
        self.local.as_ref()
    }

    fn set_remote_description(&mut self, desc: RTCSessionDescription) -> Result<(), Error> {
        if self.signaling_state != RTCSignalingState::HaveLocalOffer {
            return Err(Error::ErrPeerConnStateChangeInvalid);
        }
        if self.local.is_none() {
            return Err(Error::ErrPeerConnLocalDescriptionNil);
        }
        self.remote = Some(desc);
        self.set_signaling_state(RTCSignalingState::Stable);
        Ok(())
    }

    fn ice_gathering_state(&self) -> RTCIceGatheringState {
        self.ice_gathering_state
    }

    fn ice_connection_state(&self) -> RTCIceConnectionState {
        self.ice_connection_state
    }

    fn signaling_state(&self) -> RTCSignalingState {
        self.signaling_state
    }

    async fn next_event(&mut self) -> Result<RTCPeerConnectionEvent, Error> {
        let event = self.events.pop_front().ok_or(Error::ErrConnectionClosed)?;
        match event {
            RTCPeerConnectionEvent::OnIceGatheringStateChangeEvent(state) => {
                self.ice_gathering_state = state;
            }
            RTCPeerConnectionEvent::OnIceConnectionStateChangeEvent(state) => {
                self.ice_connection_state = state;
            }
            _ => {}
        }
        Ok(event)
    }

    fn stop_transceivers(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn stop_tracks(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        self.ice_connection_state = RTCIceConnectionState::Closed;
        self.signaling_state = RTCSignalingState::Closed;
        Ok(())
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

    if let Err(err) = run(cli).await {
        error!("run got error: {err}");
        return Err(err);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let media_constraints = MediaConstraints {
        audio: cli.use_audio,
        video: if cli.use_video {
            VideoConstraint::from_str(&cli.video_resolution)?
        } else {
            VideoConstraint::Disabled
        },
    };

    let config = RTCConfigurationBuilder::new()
        .with_stun_server(cli.use_stun)
        .with_media_constraints(media_constraints)
        .with_codec_preference(MediaKind::Audio, &cli.audio_codec)
        .with_codec_preference(MediaKind::Video, &cli.video_codec)
        .with_require_codec_match(cli.require_codec_match)
        .with_offer_field("video_transform", cli.video_transform.as_str())
        .build();

    // Wait for the offer to be pasted
    let line = if cli.offer_file.is_empty() {
        print!("Paste offer and press Enter: ");
        std::io::stdout().flush()?;
        signal::must_read_stdin()?
    } else {
        fs::read_to_string(&cli.offer_file)?
    };
    let desc_data = signal::decode(line.trim())?;
    let offer = serde_json::from_str::<RTCSessionDescription>(&desc_data)?;

    let pc = PreparedOfferConnection::new(offer)?;
    let signaler = HttpSignaler::new(&cli.server)?;
    let mut negotiator = Negotiator::new(config, pc, signaler);

    let result = negotiator.start().await;
    while let Some(event) = negotiator.poll_event() {
        match event {
            NegotiationEvent::OfferSent(sdp) => {
                println!("Offer:\n{}", sdp.replace("\r\n", "\n"));
            }
            NegotiationEvent::AnswerReceived { pc_id } => {
                println!("PC ID: {}", pc_id.as_deref().unwrap_or("unknown"));
            }
            event => info!("{event}"),
        }
    }

    if let Some(answer) = negotiator.answer() {
        println!("Answer:\n{}", answer.description().sdp.replace("\r\n", "\n"));
    }
    println!("{}", negotiator.state_log());

    let stopped = negotiator.stop();
    result?;
    stopped?;

    Ok(())
}
