//! Worker-protocol scenarios: a UI session driven through the JSON
//! message layer, the way the web host exercises the engine.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use uuid::Uuid;
use wasm_bridge::{dispatch, EngineState, EngineToUi, UiToEngine};

use test_harness::helpers::half_and_half_image;
use test_harness::oracle::parse_ascii_stl;

fn roundtrip(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    // Serialize through JSON like the real postMessage path
    let json = serde_json::to_string(&msg).unwrap();
    let msg: UiToEngine = serde_json::from_str(&json).unwrap();
    let reply = dispatch(state, msg);
    let json = serde_json::to_string(&reply).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn slider_session_generates_and_downloads() {
    let mut state = EngineState::new();

    let data = half_and_half_image(6, 6);
    let reply = roundtrip(
        &mut state,
        UiToEngine::SetImage {
            width: 6,
            height: 6,
            rgba_base64: BASE64.encode(&data),
        },
    );
    assert!(matches!(reply, EngineToUi::ImageLoaded { width: 6, height: 6 }));

    // The UI regenerates on every slider tick with a fresh request id
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    for id in [first, second] {
        let reply = roundtrip(&mut state, UiToEngine::GenerateModel { request_id: id });
        match reply {
            EngineToUi::ModelGenerated { request_id, .. } => assert_eq!(request_id, id),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    let reply = roundtrip(&mut state, UiToEngine::ExportStl { ascii: true });
    match reply {
        EngineToUi::StlReady {
            filename,
            data_base64,
        } => {
            assert_eq!(filename, "logo.stl");
            let text = String::from_utf8(BASE64.decode(data_base64).unwrap()).unwrap();
            let (name, facets) = parse_ascii_stl(&text).unwrap();
            assert_eq!(name, "logo");
            assert!(facets.len() >= 6);
        }
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn settings_update_changes_the_next_generation() {
    let mut state = EngineState::new();
    let data = half_and_half_image(6, 6);
    roundtrip(
        &mut state,
        UiToEngine::SetImage {
            width: 6,
            height: 6,
            rgba_base64: BASE64.encode(&data),
        },
    );

    roundtrip(
        &mut state,
        UiToEngine::GenerateModel {
            request_id: Uuid::nil(),
        },
    );
    assert!(state.mesh.as_ref().unwrap().triangle_count() >= 6);

    // Inverting flips which half is raised; the transition walls move
    // but the model is still generated successfully.
    let json = r#"{"type":"UpdateSettings","settings":{"invert":true,"smoothing":0.0}}"#;
    let msg: UiToEngine = serde_json::from_str(json).unwrap();
    assert!(matches!(
        dispatch(&mut state, msg),
        EngineToUi::SettingsUpdated
    ));

    roundtrip(
        &mut state,
        UiToEngine::GenerateModel {
            request_id: Uuid::nil(),
        },
    );
    assert!(state.mesh.as_ref().unwrap().triangle_count() >= 6);
}

#[test]
fn error_replies_survive_the_json_layer() {
    let mut state = EngineState::new();
    let reply = roundtrip(&mut state, UiToEngine::ExportStl { ascii: false });
    match reply {
        EngineToUi::Error { message } => assert!(message.contains("no generated model")),
        other => panic!("unexpected reply: {other:?}"),
    }
}
