//! One offer/answer round driven from the offering side.
//!
//! The [`Negotiator`] owns the platform [`PeerConnection`] and a
//! [`Signaler`]. It never touches the network itself: the peer connection
//! reports progress through [`PeerConnection::next_event`], and the owner
//! reads what happened back out of [`Negotiator::poll_event`].

pub mod event;


use std::collections::VecDeque;

use log::{debug, error, info, trace};

use crate::configuration::RTCConfiguration;
use crate::peer_connection::PeerConnection;
use crate::peer_connection::event::RTCPeerConnectionEvent;
use crate::peer_connection::state::{RTCIceGatheringState, StateLog};
use event::NegotiationEvent;
use sdp::{CodecFilter, apply_codec_preferences};
use shared::error::{Error, Result, flatten_errs};
use signal::{AnswerResponse, OfferRequest, Signaler};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
enum NegotiationPhase {
    #[default]
    Idle,
    Negotiating,
    Established,
    Failed,
    Stopped,
}

pub struct Negotiator<P: PeerConnection, S: Signaler> {
    config: RTCConfiguration,
    pc: P,
    signaler: S,

    phase: NegotiationPhase,
    state_log: StateLog,
    events: VecDeque<NegotiationEvent>,
    answer: Option<AnswerResponse>,
}

impl<P: PeerConnection, S: Signaler> Negotiator<P, S> {
    pub fn new(config: RTCConfiguration, pc: P, signaler: S) -> Self {
        let state_log = StateLog::new(
            pc.ice_gathering_state(),
            pc.ice_connection_state(),
            pc.signaling_state(),
        );

        Negotiator {
            config,
            pc,
            signaler,

            phase: NegotiationPhase::Idle,
            state_log,
            events: VecDeque::new(),
            answer: None,
        }
    }

    /// Runs the whole round: capture media, create the offer, wait for
    /// candidate gathering, pin codecs, exchange the offer for an answer
    /// and apply it.
    ///
    /// A failure is logged, queued as [`NegotiationEvent::Failed`] and
    /// returned. The negotiator then has to be stopped.
    pub async fn start(&mut self) -> Result<()> {
        match self.phase {
            NegotiationPhase::Idle => {}
            NegotiationPhase::Stopped => return Err(Error::ErrConnectionClosed),
            _ => return Err(Error::ErrNegotiatorAlreadyStarted),
        }
        self.phase = NegotiationPhase::Negotiating;

        match self.negotiate().await {
            Ok(()) => {
                self.phase = NegotiationPhase::Established;
                Ok(())
            }
            Err(err) => {
                error!("negotiation failed: {err}");
                self.phase = NegotiationPhase::Failed;
                self.events.push_back(NegotiationEvent::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    async fn negotiate(&mut self) -> Result<()> {
        let constraints = &self.config.media_constraints;
        if constraints.is_empty() {
            debug!("no local media requested");
        } else {
            debug!("acquiring media ({constraints})");
            self.pc.acquire_media(constraints).await?;
        }

        let offer = self.pc.create_offer()?;
        self.pc.set_local_description(offer)?;
        self.gather_candidates().await?;

        let local = self
            .pc
            .local_description()
            .cloned()
            .ok_or(Error::ErrPeerConnLocalDescriptionNil)?;
        if self.config.require_codec_match {
            self.check_codec_match(&local.sdp)?;
        }
        let sdp = apply_codec_preferences(&local.sdp, &self.config.codec_preferences);
        let offer = OfferRequest::new(local.with_sdp(sdp)).with_fields(&self.config.offer_fields);

        info!("sending offer");
        self.events.push_back(NegotiationEvent::OfferSent(offer.description.sdp.clone()));
        let answer = self.signaler.exchange(&offer).await?;

        self.pc.set_remote_description(answer.description.clone())?;
        let pc_id = answer.pc_id();
        match &pc_id {
            Some(pc_id) => info!("answer applied, remote peer connection {pc_id}"),
            None => info!("answer applied"),
        }
        self.events.push_back(NegotiationEvent::AnswerReceived { pc_id });
        self.answer = Some(answer);

        Ok(())
    }

    async fn gather_candidates(&mut self) -> Result<()> {
        while self.pc.ice_gathering_state() != RTCIceGatheringState::Complete {
            let event = self.pc.next_event().await?;
            self.handle_event(event);
        }
        debug!("ice gathering complete");
        Ok(())
    }

    fn check_codec_match(&self, sdp: &str) -> Result<()> {
        for preference in &self.config.codec_preferences {
            let filter = CodecFilter::new(preference.kind, &preference.codec)?;
            if filter.allowed_payload_types(sdp).is_empty() {
                return Err(Error::ErrCodecNotFound {
                    kind: preference.kind.to_string(),
                    codec: preference.codec.clone(),
                });
            }
        }
        Ok(())
    }

    /// Records a notification of the peer connection and queues it for
    /// [`poll_event`](Self::poll_event).
    pub fn handle_event(&mut self, event: RTCPeerConnectionEvent) {
        if self.state_log.record(&event) {
            debug!("{event:?}");
        } else {
            trace!("{event:?}");
        }
        self.events.push_back(NegotiationEvent::PeerConnection(event));
    }

    pub fn poll_event(&mut self) -> Option<NegotiationEvent> {
        self.events.pop_front()
    }

    /// Stops every transceiver, stops the local sender tracks and closes the
    /// peer connection. Each step runs even if an earlier one fails; their
    /// errors are joined.
    pub fn stop(&mut self) -> Result<()> {
        match self.phase {
            NegotiationPhase::Idle => return Err(Error::ErrNegotiatorNotStarted),
            NegotiationPhase::Stopped => return Err(Error::ErrConnectionClosed),
            _ => {}
        }

        let mut errs = vec![];
        if let Err(err) = self.pc.stop_transceivers() {
            errs.push(err);
        }
        if let Err(err) = self.pc.stop_tracks() {
            errs.push(err);
        }
        if let Err(err) = self.pc.close() {
            errs.push(err);
        }

        info!("stopped");
        self.phase = NegotiationPhase::Stopped;
        self.events.push_back(NegotiationEvent::Stopped);
        flatten_errs(errs)
    }

    pub fn state_log(&self) -> &StateLog {
        &self.state_log
    }

    /// The answer applied by a successful [`start`](Self::start).
    pub fn answer(&self) -> Option<&AnswerResponse> {
        self.answer.as_ref()
    }

    pub fn config(&self) -> &RTCConfiguration {
        &self.config
    }

    pub fn peer_connection(&self) -> &P {
        &self.pc
    }
}
