use super::*;

const OFFER: &str = "v=0\r
o=- 4611731400430051336 2 IN IP4 127.0.0.1\r
s=-\r
t=0 0\r
a=group:BUNDLE 0 1\r
a=msid-semantic: WMS\r
m=audio 9 UDP/TLS/RTP/SAVPF 111 63 9 0 8\r
c=IN IP4 0.0.0.0\r
a=mid:0\r
a=sendrecv\r
a=rtpmap:111 opus/48000/2\r
a=rtcp-fb:111 transport-cc\r
a=fmtp:111 minptime=10;useinbandfec=1\r
a=rtpmap:63 red/48000/2\r
a=fmtp:63 111/111\r
a=rtpmap:9 G722/8000\r
a=rtpmap:0 PCMU/8000\r
a=rtpmap:8 PCMA/8000\r
m=video 9 UDP/TLS/RTP/SAVPF 96 97 102 103 45\r
c=IN IP4 0.0.0.0\r
a=mid:1\r
a=sendrecv\r
a=rtpmap:96 VP8/90000\r
a=rtcp-fb:96 goog-remb\r
a=rtcp-fb:96 nack\r
a=rtcp-fb:96 nack pli\r
a=rtpmap:97 rtx/90000\r
a=fmtp:97 apt=96\r
a=rtpmap:102 H264/90000\r
a=rtcp-fb:102 nack\r
a=fmtp:102 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42001f\r
a=rtpmap:103 rtx/90000\r
a=fmtp:103 apt=102\r
a=rtpmap:45 AV1/90000\r
a=rtcp-fb:45 nack\r
";

fn media_line<'a>(sdp: &'a str, prefix: &str) -> &'a str {
    sdp.lines()
        .find(|line| line.starts_with(prefix))
        .map(|line| line.trim_end_matches('\r'))
        .unwrap()
}

fn section<'a>(sdp: &'a str, prefix: &str) -> Vec<&'a str> {
    let mut inside = false;
    sdp.split_terminator('\n')
        .filter(|line| {
            if line.starts_with(prefix) {
                inside = true;
            } else if line.starts_with("m=") {
                inside = false;
            }
            inside
        })
        .collect()
}

#[test]
fn test_filter_video_h264_keeps_codec_and_rtx() {
    let filter = CodecFilter::new(MediaKind::Video, "H264").unwrap();
    assert_eq!(filter.allowed_payload_types(OFFER), vec![102, 103]);

    let filtered = filter.filter(OFFER);
    assert_eq!(
        media_line(&filtered, "m=video "),
        "m=video 9 UDP/TLS/RTP/SAVPF 102 103"
    );

    let video = section(&filtered, "m=video ");
    assert_eq!(
        video,
        vec![
            "m=video 9 UDP/TLS/RTP/SAVPF 102 103\r",
            "c=IN IP4 0.0.0.0\r",
            "a=mid:1\r",
            "a=sendrecv\r",
            "a=rtpmap:102 H264/90000\r",
            "a=rtcp-fb:102 nack\r",
            "a=fmtp:102 level-asymmetry-allowed=1;packetization-mode=1;profile-level-id=42001f\r",
            "a=rtpmap:103 rtx/90000\r",
            "a=fmtp:103 apt=102\r",
        ]
    );
}

#[test]
fn test_filter_audio_opus() {
    let filtered = filter_codec(MediaKind::Audio, "opus", OFFER);
    assert_eq!(
        media_line(&filtered, "m=audio "),
        "m=audio 9 UDP/TLS/RTP/SAVPF 111"
    );

    let audio = section(&filtered, "m=audio ");
    assert!(audio.contains(&"a=rtpmap:111 opus/48000/2\r"));
    assert!(audio.contains(&"a=fmtp:111 minptime=10;useinbandfec=1\r"));
    assert!(!audio.iter().any(|line| line.starts_with("a=rtpmap:63")));
    assert!(!audio.iter().any(|line| line.starts_with("a=fmtp:63")));
    assert!(!audio.iter().any(|line| line.starts_with("a=rtpmap:0 ")));
}

#[test]
fn test_lines_outside_target_section_are_untouched() {
    let filtered = filter_codec(MediaKind::Video, "VP8", OFFER);

    let before: Vec<&str> = OFFER.split_inclusive('\n').collect();
    let after: Vec<&str> = filtered.split_inclusive('\n').collect();

    let video_start = before
        .iter()
        .position(|line| line.starts_with("m=video "))
        .unwrap();
    assert_eq!(before[..video_start], after[..video_start]);
}

#[test]
fn test_no_matching_codec_empties_payload_list() {
    let filter = CodecFilter::new(MediaKind::Video, "VP9").unwrap();
    assert!(filter.allowed_payload_types(OFFER).is_empty());

    let filtered = filter.filter(OFFER);
    assert_eq!(
        media_line(&filtered, "m=video "),
        "m=video 9 UDP/TLS/RTP/SAVPF "
    );

    let video = section(&filtered, "m=video ");
    assert_eq!(
        video,
        vec![
            "m=video 9 UDP/TLS/RTP/SAVPF \r",
            "c=IN IP4 0.0.0.0\r",
            "a=mid:1\r",
            "a=sendrecv\r",
        ]
    );
}

#[test]
fn test_rtx_after_codec_is_allowed() {
    let sdp = "m=video 9 UDP/TLS/RTP/SAVPF 96 97 98\n\
               a=rtpmap:96 VP8/90000\n\
               a=fmtp:97 apt=96\n\
               a=rtpmap:98 VP9/90000\n";

    let filter = CodecFilter::new(MediaKind::Video, "VP8").unwrap();
    assert_eq!(filter.allowed_payload_types(sdp), vec![96, 97]);
    assert_eq!(
        filter.filter(sdp),
        "m=video 9 UDP/TLS/RTP/SAVPF 96 97\n\
         a=rtpmap:96 VP8/90000\n\
         a=fmtp:97 apt=96\n"
    );
}

#[test]
fn test_rtx_before_codec_is_dropped() {
    let sdp = "m=video 9 UDP/TLS/RTP/SAVPF 96 97\n\
               a=fmtp:97 apt=96\n\
               a=rtpmap:96 VP8/90000\n";

    let filter = CodecFilter::new(MediaKind::Video, "VP8").unwrap();
    assert_eq!(filter.allowed_payload_types(sdp), vec![96]);
    assert_eq!(
        filter.filter(sdp),
        "m=video 9 UDP/TLS/RTP/SAVPF 96\n\
         a=rtpmap:96 VP8/90000\n"
    );
}

#[test]
fn test_rtx_with_trailing_parameters_is_not_an_association() {
    let sdp = "m=video 9 UDP/TLS/RTP/SAVPF 96 97\n\
               a=rtpmap:96 VP8/90000\n\
               a=fmtp:97 apt=96;rtx-time=3000\n";

    let filter = CodecFilter::new(MediaKind::Video, "VP8").unwrap();
    assert_eq!(filter.allowed_payload_types(sdp), vec![96]);
}

#[test]
fn test_duplicates_follow_discovery_order() {
    let sdp = "m=video 9 RTP/AVP 96 98\n\
               a=rtpmap:96 VP8/90000\n\
               a=rtpmap:98 VP8/90000\n\
               a=rtpmap:96 VP8/90000\n";

    let filter = CodecFilter::new(MediaKind::Video, "VP8").unwrap();
    assert_eq!(filter.allowed_payload_types(sdp), vec![96, 98, 96]);
    assert_eq!(
        media_line(&filter.filter(sdp), "m=video "),
        "m=video 9 RTP/AVP 96 98 96"
    );
}

#[test]
fn test_filter_is_idempotent() {
    let tests = vec![
        (MediaKind::Video, "H264"),
        (MediaKind::Video, "VP8"),
        (MediaKind::Video, "VP9"),
        (MediaKind::Audio, "opus"),
        (MediaKind::Audio, "PCMU"),
    ];

    for (kind, codec) in tests {
        let once = filter_codec(kind, codec, OFFER);
        let twice = filter_codec(kind, codec, &once);
        assert_eq!(once, twice, "{kind} {codec}");
    }
}

#[test]
fn test_missing_section_leaves_document_unchanged() {
    let sdp = "v=0\r\no=- 1 2 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\n\
               m=audio 9 UDP/TLS/RTP/SAVPF 111\r\na=rtpmap:111 opus/48000/2\r\n";

    assert_eq!(filter_codec(MediaKind::Video, "VP8", sdp), sdp);
    assert_eq!(filter_codec(MediaKind::Unspecified, "opus", sdp), sdp);
}

#[test]
fn test_unspecified_kind_is_rejected() {
    assert!(matches!(
        CodecFilter::new(MediaKind::Unspecified, "opus"),
        Err(Error::ErrMediaKindUnspecified)
    ));
}

#[test]
fn test_output_is_newline_terminated() {
    let sdp = "v=0\nm=audio 9 RTP/AVP 0 8\na=rtpmap:0 PCMU/8000\na=rtpmap:8 PCMA/8000";

    assert_eq!(
        filter_codec(MediaKind::Audio, "PCMA", sdp),
        "v=0\nm=audio 9 RTP/AVP 8\na=rtpmap:8 PCMA/8000\n"
    );
}

#[test]
fn test_codec_name_is_case_sensitive_and_literal() {
    let sdp = "m=video 9 RTP/AVP 96 100\n\
               a=rtpmap:96 VP8/90000\n\
               a=rtpmap:100 VPX8/90000\n";

    let filter = CodecFilter::new(MediaKind::Video, "vp8").unwrap();
    assert!(filter.allowed_payload_types(sdp).is_empty());

    let filter = CodecFilter::new(MediaKind::Video, "V.8").unwrap();
    assert!(filter.allowed_payload_types(sdp).is_empty());

    let filter = CodecFilter::new(MediaKind::Video, "VP8").unwrap();
    assert_eq!(filter.allowed_payload_types(sdp), vec![96]);
}

#[test]
fn test_every_target_section_is_filtered() {
    let sdp = "m=video 9 RTP/AVP 96 102\n\
               a=rtpmap:96 VP8/90000\n\
               a=rtpmap:102 H264/90000\n\
               m=audio 9 RTP/AVP 0\n\
               a=rtpmap:0 PCMU/8000\n\
               m=video 9 RTP/AVP 96 102\n\
               a=rtpmap:96 VP8/90000\n\
               a=rtpmap:102 H264/90000\n";

    assert_eq!(
        filter_codec(MediaKind::Video, "H264", sdp),
        "m=video 9 RTP/AVP 102 102\n\
         a=rtpmap:102 H264/90000\n\
         m=audio 9 RTP/AVP 0\n\
         a=rtpmap:0 PCMU/8000\n\
         m=video 9 RTP/AVP 102 102\n\
         a=rtpmap:102 H264/90000\n"
    );
}

#[test]
fn test_payload_types_above_rtp_range() {
    let sdp = "m=video 9 RTP/AVP 300 96\n\
               a=rtpmap:300 VP8/90000\n\
               a=rtpmap:96 H264/90000\n";

    let filter = CodecFilter::new(MediaKind::Video, "VP8").unwrap();
    assert_eq!(filter.allowed_payload_types(sdp), vec![300]);
    assert_eq!(
        filter_codec(MediaKind::Video, "VP8", sdp),
        "m=video 9 RTP/AVP 300\na=rtpmap:300 VP8/90000\n"
    );
}
