use kiosk_models::{
    domain::prelude::*,
    enums::common::{AspectRatio, MediaKind, TicketKind, Toggle},
    settings::Sqlite,
};
use kiosk_repository::*;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

async fn setup() -> (TempDir, DatabaseConnection) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = Sqlite {
        dir: tmp.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let db = kiosk_storage::open_database(&config)
        .await
        .expect("open database");
    (tmp, db)
}

async fn upload(db: &DatabaseConnection, name: &str, kind: MediaKind) -> i32 {
    MediaRepository::create(db, NewMedia::new(name, kind))
        .await
        .expect("create media")
        .id
}

#[tokio::test]
async fn test_singletons_have_defaults() {
    let (_tmp, db) = setup().await;

    let printer = PrinterRepository::get(&db).await.unwrap();
    assert_eq!(printer.id, 1);
    assert_eq!(printer.value, TicketKind::Registered);
    assert!(!printer.active);

    let touch = TouchScreenRepository::get(&db).await.unwrap();
    assert!(touch.n);
    assert_eq!(touch.title, "Please select a task to pull a ticket for");
    assert_eq!(touch.ikey, None);

    let display = DisplayScreenRepository::get(&db).await.unwrap();
    assert_eq!(display.rrate, "2000");
    assert_eq!(display.announce_languages(), vec!["en-us"]);

    let slideshow = SlideshowRepository::get(&db).await.unwrap();
    assert!(!slideshow.status);
    assert_eq!(slideshow.navigation, Toggle::Enabled);

    let video = VideoRepository::get(&db).await.unwrap();
    assert_eq!(video.enable, Toggle::Disabled);
    assert_eq!(video.ar, AspectRatio::Auto);
    assert_eq!(video.vkey, None);

    let aliases = AliasesRepository::get(&db).await.unwrap();
    assert_eq!(aliases.office, "Office");
    assert_eq!(aliases.number, "Number");
}

#[tokio::test]
async fn test_concurrent_first_reads_create_one_row() {
    let (_tmp, db) = setup().await;
    let (a, b) = tokio::join!(AliasesRepository::get(&db), AliasesRepository::get(&db));
    assert_eq!(a.unwrap(), b.unwrap());
    let again = AliasesRepository::get(&db).await.unwrap();
    assert_eq!(again.id, 1);
}

#[tokio::test]
async fn test_aliases_partial_update() {
    let (_tmp, db) = setup().await;
    let saved = AliasesRepository::save(
        &db,
        UpdateAliases {
            office: Some("t_office".into()),
            task: Some("t_task".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(saved.office, "t_office");
    assert_eq!(saved.task, "t_task");
    assert_eq!(saved.ticket, "Ticket");

    let unchanged = AliasesRepository::save(&db, UpdateAliases::default())
        .await
        .unwrap();
    assert_eq!(unchanged, saved);
}

#[tokio::test]
async fn test_record_ticket_updates_printer_and_touch_screen() {
    let (_tmp, db) = setup().await;

    let identity: PrinterIdentity = "0x0416_0x5011_0x81_0x03".parse().unwrap();
    let printer = PrinterRepository::record_ticket(
        &db,
        TicketCommand::Printed {
            identity,
            langu: Some("fr".into()),
            scale: Some(2),
            header: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(printer.value, TicketKind::Printed);
    assert!(printer.active);
    assert_eq!(printer.vendor, 0x0416);
    assert_eq!(printer.langu, "fr");
    assert_eq!(printer.header, "Queue Management");
    assert!(!TouchScreenRepository::get(&db).await.unwrap().n);

    let printer = PrinterRepository::record_ticket(&db, TicketCommand::Registered)
        .await
        .unwrap();
    assert_eq!(printer.value, TicketKind::Registered);
    assert!(!printer.active);
    assert_eq!(printer.vendor, 0x0416);
    assert!(TouchScreenRepository::get(&db).await.unwrap().n);
}

#[tokio::test]
async fn test_media_lifecycle() {
    let (_tmp, db) = setup().await;
    let id = upload(&db, "test.jpg", MediaKind::Image).await;

    let media = MediaRepository::get(&db, id).await.unwrap().unwrap();
    assert_eq!(media.name, "test.jpg");
    assert_eq!(media.kind(), Some(MediaKind::Image));
    assert!(!media.used);
    assert!(MediaRepository::find_by_name(&db, "test.jpg")
        .await
        .unwrap()
        .is_some());
    assert_eq!(
        MediaRepository::list_by_kind(&db, MediaKind::Image)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(MediaRepository::list_by_kind(&db, MediaKind::Audio)
        .await
        .unwrap()
        .is_empty());

    let removed = MediaRepository::delete(&db, id).await.unwrap();
    assert_eq!(removed.map(|m| m.name), Some("test.jpg".to_string()));
    assert!(MediaRepository::get(&db, id).await.unwrap().is_none());
    assert!(MediaRepository::delete(&db, id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_media_name_is_rejected() {
    let (_tmp, db) = setup().await;
    upload(&db, "clip.mp4", MediaKind::Video).await;
    assert!(
        MediaRepository::create(&db, NewMedia::new("clip.mp4", MediaKind::Video))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_resolve_media_selection() {
    let (_tmp, db) = setup().await;
    let image = upload(&db, "bg.png", MediaKind::Image).await;
    let audio = upload(&db, "bell.mp3", MediaKind::Audio).await;

    let resolved = MediaRepository::resolve(&db, Some(MediaRef::Select(image)), MediaKind::Image)
        .await
        .unwrap();
    assert_eq!(resolved, Some(Some(image)));
    assert!(MediaRepository::get(&db, image).await.unwrap().unwrap().used);

    let wrong_kind =
        MediaRepository::resolve(&db, Some(MediaRef::Select(audio)), MediaKind::Image)
            .await
            .unwrap();
    assert_eq!(wrong_kind, None);
    assert!(!MediaRepository::get(&db, audio).await.unwrap().unwrap().used);

    let missing = MediaRepository::resolve(&db, Some(MediaRef::Select(999)), MediaKind::Image)
        .await
        .unwrap();
    assert_eq!(missing, None);

    let cleared = MediaRepository::resolve(&db, Some(MediaRef::Clear), MediaKind::Image)
        .await
        .unwrap();
    assert_eq!(cleared, Some(None));
}

#[tokio::test]
async fn test_touch_screen_background_and_audio() {
    let (_tmp, db) = setup().await;
    let image = upload(&db, "bg.png", MediaKind::Image).await;
    let audio = upload(&db, "bell.mp3", MediaKind::Audio).await;

    let touch = TouchScreenRepository::save(
        &db,
        UpdateTouchScreen {
            tmp: Some(2),
            message: Some("Thanks".into()),
            ..Default::default()
        },
        Some(MediaRef::Select(image)),
        Some(MediaRef::Select(audio)),
    )
    .await
    .unwrap();
    assert_eq!(touch.tmp, 2);
    assert_eq!(touch.message, "Thanks");
    assert_eq!(touch.ikey, Some(image));
    assert_eq!(touch.akey, Some(audio));

    let touch = TouchScreenRepository::save(
        &db,
        UpdateTouchScreen::default(),
        Some(MediaRef::Clear),
        None,
    )
    .await
    .unwrap();
    assert_eq!(touch.ikey, None);
    assert_eq!(touch.akey, Some(audio));
}

#[tokio::test]
async fn test_display_screen_save() {
    let (_tmp, db) = setup().await;
    let display = DisplayScreenRepository::save(
        &db,
        UpdateDisplayScreen {
            title: Some("Welcome".into()),
            announce: Some("en-us,fr".into()),
            prefix: Some(true),
            anr: Some(3),
            ..Default::default()
        },
        Some(MediaRef::Clear),
        Some(MediaRef::Select(42)),
    )
    .await
    .unwrap();
    assert_eq!(display.title, "Welcome");
    assert_eq!(display.announce_languages(), vec!["en-us", "fr"]);
    assert!(display.prefix);
    assert!(!display.always_show_ticket_number);
    assert_eq!(display.anr, 3);
    assert_eq!(display.akey, None);
}

#[tokio::test]
async fn test_video_and_slideshow_are_exclusive() {
    let (_tmp, db) = setup().await;
    let clip = upload(&db, "clip.mp4", MediaKind::Video).await;

    SlideshowRepository::save(
        &db,
        UpdateSlideshow {
            status: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let video = VideoRepository::save(
        &db,
        UpdateVideo {
            enable: Some(Toggle::Enabled),
            mute: Some(Toggle::Disabled),
            controls: Some(Toggle::Disabled),
            ar: Some(AspectRatio::Auto),
            ..Default::default()
        },
        Some(clip),
    )
    .await
    .unwrap();
    assert_eq!(video.enable, Toggle::Enabled);
    assert_eq!(video.vname, "clip.mp4");
    assert_eq!(video.vkey, Some(clip));
    assert!(MediaRepository::get(&db, clip).await.unwrap().unwrap().used);
    assert!(!SlideshowRepository::get(&db).await.unwrap().status);

    let slideshow = SlideshowRepository::save(
        &db,
        UpdateSlideshow {
            status: Some(true),
            rotation: Some("5000".into()),
            navigation: Some(Toggle::Disabled),
            effect: Some("fade".into()),
        },
    )
    .await
    .unwrap();
    assert!(slideshow.status);
    assert_eq!(slideshow.rotation, "5000");
    assert_eq!(
        VideoRepository::get(&db).await.unwrap().enable,
        Toggle::Disabled
    );
}

#[tokio::test]
async fn test_video_ignores_non_video_media() {
    let (_tmp, db) = setup().await;
    let image = upload(&db, "bg.png", MediaKind::Image).await;
    let video = VideoRepository::save(&db, UpdateVideo::default(), Some(image))
        .await
        .unwrap();
    assert_eq!(video.vkey, None);
    assert_eq!(video.vname, "");
    assert!(!MediaRepository::get(&db, image).await.unwrap().unwrap().used);
}

#[tokio::test]
async fn test_slide_crud() {
    let (_tmp, db) = setup().await;
    let image = upload(&db, "slide.png", MediaKind::Image).await;

    let first = SlideRepository::create(
        &db,
        NewSlide {
            title: "First".into(),
            ..Default::default()
        },
        Some(MediaRef::Select(image)),
    )
    .await
    .unwrap();
    assert_eq!(first.ikey, Some(image));
    assert!(MediaRepository::get(&db, image).await.unwrap().unwrap().used);

    let second = SlideRepository::create(
        &db,
        NewSlide {
            title: "Second".into(),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();
    assert_eq!(second.ikey, None);

    let unknown = SlideRepository::create(&db, NewSlide::default(), Some(MediaRef::Select(77)))
        .await
        .unwrap();
    assert_eq!(unknown.ikey, None);

    let edited = SlideRepository::update(
        &db,
        second.id,
        UpdateSlide {
            subti: Some("Sub".into()),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(edited.title, "Second");
    assert_eq!(edited.subti, "Sub");
    assert!(
        SlideRepository::update(&db, 999, UpdateSlide::default(), None)
            .await
            .unwrap()
            .is_none()
    );

    assert!(SlideRepository::delete(&db, first.id).await.unwrap());
    assert!(SlideRepository::get(&db, first.id).await.unwrap().is_none());
    assert!(!SlideRepository::delete(&db, first.id).await.unwrap());

    let ids = SlideRepository::list(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![second.id, unknown.id]);
}
