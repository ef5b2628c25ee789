use actix_web::{
    http::{header, StatusCode},
    test,
    web::Data,
    App,
};
use kiosk_models::{
    domain::prelude::NewMedia,
    enums::common::{MediaKind, TicketKind, Toggle},
    settings::{Inner, Media, Settings, Sqlite},
};
use kiosk_repository::*;
use kiosk_web::{configure_app, AppState};
use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use tempfile::TempDir;

const BOUNDARY: &str = "----kiosk-test-boundary";

struct TestEnv {
    _tmp: TempDir,
    db: DatabaseConnection,
    upload_dir: PathBuf,
    state: Arc<AppState>,
}

async fn setup() -> TestEnv {
    let tmp = tempfile::tempdir().expect("tempdir");
    let upload_dir = tmp.path().join("uploads");
    let settings = Settings::from_inner(Inner {
        media: Media {
            upload_dir: upload_dir.to_string_lossy().into_owned(),
            max_upload_bytes: 1024,
        },
        ..Default::default()
    });
    let db = kiosk_storage::open_database(&Sqlite {
        dir: tmp.path().to_string_lossy().into_owned(),
        ..Default::default()
    })
    .await
    .expect("open database");
    let state = Arc::new(AppState::new(db.clone(), &settings));
    TestEnv {
        _tmp: tmp,
        db,
        upload_dir,
        state,
    }
}

macro_rules! app {
    ($env:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($env.state.clone()))
                .configure(configure_app),
        )
        .await
    };
}

fn location(resp: &actix_web::dev::ServiceResponse) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

fn multipart(field: &str, file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
         filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

async fn media(db: &DatabaseConnection, name: &str, kind: MediaKind) -> i32 {
    MediaRepository::create(db, NewMedia::new(name, kind))
        .await
        .expect("create media")
        .id
}

#[actix_web::test]
async fn test_root_and_landing_page() {
    let env = setup().await;
    let app = app!(env);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/customize"));

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/customize").to_request(),
    )
    .await;
    assert!(String::from_utf8_lossy(&body).contains("Customization"));

    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/healthz").to_request())
            .await;
    assert_eq!(&body[..], b"ok");
}

#[actix_web::test]
async fn test_every_page_renders() {
    let env = setup().await;
    let app = app!(env);

    for uri in [
        "/ticket",
        "/video",
        "/slideshow",
        "/multimedia/1",
        "/multimedia/2",
        "/multimedia/3",
        "/displayscreen_c/1",
        "/touchscreen_c/1",
        "/alias",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/multimedia/9").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_ticket_registered_and_printed() {
    let env = setup().await;
    let app = app!(env);

    let req = test::TestRequest::post()
        .uri("/ticket")
        .set_form(&[
            ("value", "2"),
            ("printer", "0x04b8_0x0202_0x81_0x02"),
            ("langu", "fr"),
            ("scale", "2"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/ticket"));

    let printer = PrinterRepository::get(&env.db).await.unwrap();
    assert_eq!(printer.value, TicketKind::Printed);
    assert!(printer.active);
    assert_eq!(printer.vendor, 0x04b8);
    assert_eq!(printer.out_ep, 2);
    assert_eq!(printer.langu, "fr");
    assert_eq!(printer.scale, 2);
    assert!(!TouchScreenRepository::get(&env.db).await.unwrap().n);

    let req = test::TestRequest::post()
        .uri("/ticket")
        .set_form(&[("value", "1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let printer = PrinterRepository::get(&env.db).await.unwrap();
    assert_eq!(printer.value, TicketKind::Registered);
    assert!(!printer.active);
    assert!(TouchScreenRepository::get(&env.db).await.unwrap().n);
}

#[actix_web::test]
async fn test_ticket_invalid_input_is_ignored() {
    let env = setup().await;
    let app = app!(env);

    for form in [
        vec![("value", "7")],
        vec![("value", "2"), ("printer", "not-a-printer")],
        vec![("value", "2"), ("printer", "1_2_3_4"), ("scale", "99")],
    ] {
        let req = test::TestRequest::post()
            .uri("/ticket")
            .set_form(&form)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), Some("/ticket"));
    }

    let printer = PrinterRepository::get(&env.db).await.unwrap();
    assert_eq!(printer.value, TicketKind::Registered);
    assert!(!printer.active);
}

#[actix_web::test]
async fn test_enabling_video_marks_media_used() {
    let env = setup().await;
    let app = app!(env);
    SlideshowRepository::update(
        &env.db,
        kiosk_models::domain::prelude::UpdateSlideshow {
            status: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let clip = media(&env.db, "clip.mp4", MediaKind::Video).await;

    let clip_id = clip.to_string();
    let req = test::TestRequest::post()
        .uri("/video")
        .set_form(&[
            ("video", clip_id.as_str()),
            ("enable", "1"),
            ("mute", "1"),
            ("controls", "2"),
            ("ar", "2"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/video"));

    let video = VideoRepository::get(&env.db).await.unwrap();
    assert_eq!(video.enable, Toggle::Enabled);
    assert_eq!(video.controls, Toggle::Disabled);
    assert_eq!(video.vkey, Some(clip));
    assert_eq!(video.vname, "clip.mp4");
    assert!(MediaRepository::get(&env.db, clip).await.unwrap().unwrap().used);
    assert!(!SlideshowRepository::get(&env.db).await.unwrap().status);
}

#[actix_web::test]
async fn test_undecodable_form_redirects() {
    let env = setup().await;
    let app = app!(env);

    let req = test::TestRequest::post()
        .uri("/video")
        .set_form(&[("ar", "wide"), ("enable", "1")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/video"));
    assert_eq!(
        VideoRepository::get(&env.db).await.unwrap().enable,
        Toggle::Disabled
    );
}

#[actix_web::test]
async fn test_slide_lifecycle() {
    let env = setup().await;
    let app = app!(env);
    let image = media(&env.db, "bg.png", MediaKind::Image).await;

    let image_id = image.to_string();
    let req = test::TestRequest::post()
        .uri("/slide_a")
        .set_form(&[("background", image_id.as_str()), ("title", "Welcome")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/slideshow"));

    let req = test::TestRequest::post()
        .uri("/slide_a")
        .set_form(&[("title", "Plain")])
        .to_request();
    test::call_service(&app, req).await;

    let slides = SlideRepository::list(&env.db).await.unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].ikey, Some(image));
    assert_eq!(slides[1].ikey, None);
    assert!(MediaRepository::get(&env.db, image).await.unwrap().unwrap().used);

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/slideshow").to_request(),
    )
    .await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains(&format!("{}. Welcome", slides[0].id)));
    assert!(body.contains(&format!("{}. Plain", slides[1].id)));

    let req = test::TestRequest::post()
        .uri(&format!("/slide_e/{}", slides[1].id))
        .set_form(&[("title", "Edited"), ("subti", "below")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let edited = SlideRepository::get(&env.db, slides[1].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(edited.title, "Edited");
    assert_eq!(edited.subti, "below");

    let req = test::TestRequest::post()
        .uri("/slide_e/999")
        .set_form(&[("title", "Ghost")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/slide_r/{}", slides[0].id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/slideshow"));
    assert!(SlideRepository::get(&env.db, slides[0].id)
        .await
        .unwrap()
        .is_none());
}

#[actix_web::test]
async fn test_enabling_slideshow_disables_video() {
    let env = setup().await;
    let app = app!(env);
    VideoRepository::update(
        &env.db,
        kiosk_models::domain::prelude::UpdateVideo {
            enable: Some(Toggle::Enabled),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let req = test::TestRequest::post()
        .uri("/slide_c")
        .set_form(&[
            ("status", "1"),
            ("rotation", "5000"),
            ("navigation", "2"),
            ("effect", "slide"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let slideshow = SlideshowRepository::get(&env.db).await.unwrap();
    assert!(slideshow.status);
    assert_eq!(slideshow.rotation, "5000");
    assert_eq!(slideshow.navigation, Toggle::Disabled);
    assert_eq!(slideshow.effect, "slide");
    assert_eq!(
        VideoRepository::get(&env.db).await.unwrap().enable,
        Toggle::Disabled
    );
}

#[actix_web::test]
async fn test_upload_accepts_allowed_extension() {
    let env = setup().await;
    let app = app!(env);

    let (content_type, body) = multipart("mf", "test.jpg", b"jpeg bytes");
    let req = test::TestRequest::post()
        .uri("/multimedia/1")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/multimedia/1"));

    let images = MediaRepository::list_by_kind(&env.db, MediaKind::Image)
        .await
        .unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].name, "test.jpg");
    assert!(images[0].img && !images[0].audio && !images[0].vid);
    assert_eq!(
        std::fs::read(env.upload_dir.join("test.jpg")).unwrap(),
        b"jpeg bytes"
    );

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/multimedia/1").to_request(),
    )
    .await;
    assert!(String::from_utf8_lossy(&body).contains("test.jpg"));
}

#[actix_web::test]
async fn test_upload_rejections_leave_no_trace() {
    let env = setup().await;
    let app = app!(env);
    let oversized = vec![b'x'; 2048];

    for (uri, field, file_name, content) in [
        ("/multimedia/1", "mf", "test.wrn", &b"data"[..]),
        ("/multimedia/3", "mf", "still.jpg", &b"data"[..]),
        ("/multimedia/2", "mf", "empty.mp3", &b""[..]),
        ("/multimedia/2", "other", "song.mp3", &b"data"[..]),
        ("/multimedia/1", "mf", "huge.png", &oversized[..]),
        ("/multimedia/7", "mf", "test.jpg", &b"data"[..]),
    ] {
        let (content_type, body) = multipart(field, file_name, content);
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "POST {uri} {file_name}");
    }

    for kind in [MediaKind::Image, MediaKind::Audio, MediaKind::Video] {
        assert!(MediaRepository::list_by_kind(&env.db, kind)
            .await
            .unwrap()
            .is_empty());
    }
    let stored = std::fs::read_dir(&env.upload_dir)
        .map(|dir| dir.count())
        .unwrap_or(0);
    assert_eq!(stored, 0);
}

#[actix_web::test]
async fn test_duplicate_upload_is_rejected() {
    let env = setup().await;
    let app = app!(env);

    for content in [&b"first"[..], &b"second"[..]] {
        let (content_type, body) = multipart("mf", "chime.mp3", content);
        let req = test::TestRequest::post()
            .uri("/multimedia/2")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let audio = MediaRepository::list_by_kind(&env.db, MediaKind::Audio)
        .await
        .unwrap();
    assert_eq!(audio.len(), 1);
    assert_eq!(
        std::fs::read(env.upload_dir.join("chime.mp3")).unwrap(),
        b"first"
    );
}

#[actix_web::test]
async fn test_delete_media() {
    let env = setup().await;
    let app = app!(env);

    let (content_type, body) = multipart("mf", "intro.mp4", b"video");
    let req = test::TestRequest::post()
        .uri("/multimedia/3")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    test::call_service(&app, req).await;
    let id = MediaRepository::find_by_name(&env.db, "intro.mp4")
        .await
        .unwrap()
        .expect("uploaded")
        .id;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/multi_del/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/multimedia/3"));
    assert!(MediaRepository::get(&env.db, id).await.unwrap().is_none());
    assert!(!env.upload_dir.join("intro.mp4").exists());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/multi_del/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn test_display_screen_form() {
    let env = setup().await;
    let app = app!(env);
    let chime = media(&env.db, "chime.wav", MediaKind::Audio).await;

    let chime_id = chime.to_string();
    let req = test::TestRequest::post()
        .uri("/displayscreen_c/3")
        .set_form(&[
            ("display", "2"),
            ("title", "Now serving"),
            ("anr", "3"),
            ("anrt", "whole"),
            ("prefix", "True"),
            ("checken-us", "on"),
            ("checkfr", "on"),
            ("naudio", chime_id.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/displayscreen_c/3"));

    let display = DisplayScreenRepository::get(&env.db).await.unwrap();
    assert_eq!(display.tmp, 2);
    assert_eq!(display.title, "Now serving");
    assert_eq!(display.anr, 3);
    assert_eq!(display.anrt, "whole");
    assert!(display.prefix);
    assert!(!display.always_show_ticket_number);
    assert_eq!(display.announce_languages(), vec!["en-us", "fr"]);
    assert_eq!(display.akey, Some(chime));

    let body = test::call_and_read_body(
        &app,
        test::TestRequest::get().uri("/displayscreen_c/3").to_request(),
    )
    .await;
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains(r#"data-tab="3""#));
    assert!(body.contains("Now serving"));

    let req = test::TestRequest::post()
        .uri("/displayscreen_c/3")
        .set_form(&[("anr", "9"), ("title", "Rejected")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let display = DisplayScreenRepository::get(&env.db).await.unwrap();
    assert_eq!(display.anr, 3);
    assert_eq!(display.title, "Now serving");
}

#[actix_web::test]
async fn test_touch_screen_form() {
    let env = setup().await;
    let app = app!(env);
    let image = media(&env.db, "touch.png", MediaKind::Image).await;
    let chime = media(&env.db, "ding.ogg", MediaKind::Audio).await;

    let (image_id, chime_id) = (image.to_string(), chime.to_string());
    let req = test::TestRequest::post()
        .uri("/touchscreen_c/2")
        .set_form(&[
            ("touch", "3"),
            ("title", "Take a ticket"),
            ("message", "Thank you"),
            ("background", image_id.as_str()),
            ("naudio", chime_id.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/touchscreen_c/2"));

    let touch = TouchScreenRepository::get(&env.db).await.unwrap();
    assert_eq!(touch.tmp, 3);
    assert_eq!(touch.title, "Take a ticket");
    assert_eq!(touch.message, "Thank you");
    assert_eq!(touch.ikey, Some(image));
    assert_eq!(touch.akey, Some(chime));
    assert!(MediaRepository::get(&env.db, chime).await.unwrap().unwrap().used);

    let req = test::TestRequest::post()
        .uri("/touchscreen_c/2")
        .set_form(&[("background", "0")])
        .to_request();
    test::call_service(&app, req).await;
    let touch = TouchScreenRepository::get(&env.db).await.unwrap();
    assert_eq!(touch.ikey, None);
    assert_eq!(touch.akey, Some(chime));
}

#[actix_web::test]
async fn test_alias_form() {
    let env = setup().await;
    let app = app!(env);

    let req = test::TestRequest::post()
        .uri("/alias")
        .set_form(&[
            ("office", "t_office"),
            ("task", "t_task"),
            ("ticket", "t_ticket"),
            ("name", "t_name"),
            ("number", "t_number"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/alias"));

    let aliases = AliasesRepository::get(&env.db).await.unwrap();
    assert_eq!(aliases.office, "t_office");
    assert_eq!(aliases.task, "t_task");
    assert_eq!(aliases.ticket, "t_ticket");
    assert_eq!(aliases.name, "t_name");
    assert_eq!(aliases.number, "t_number");

    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/alias").to_request())
            .await;
    assert!(String::from_utf8_lossy(&body).contains("t_office"));
}
