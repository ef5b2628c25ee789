use super::{escape, Form, Page};
use kiosk_models::{
    domain::display_screen::{ANNOUNCE_CHECK_PREFIX, REPEAT_TYPES},
    entities::prelude::*,
    enums::common::{AspectRatio, MediaKind, Toggle},
};
use sea_orm::{ActiveEnum, Iterable};

const TEMPLATES: [(&str, &str); 3] = [("1", "Template 1"), ("2", "Template 2"), ("3", "Template 3")];

fn toggle_options() -> Vec<(String, &'static str)> {
    Toggle::iter()
        .map(|t| {
            let label = if t.is_enabled() { "Enabled" } else { "Disabled" };
            (t.to_value().to_string(), label)
        })
        .collect()
}

/// `0` first, meaning no media.
fn media_options(items: &[MediaModel]) -> Vec<(String, String)> {
    std::iter::once(("0".to_string(), "None".to_string()))
        .chain(items.iter().map(|m| (m.id.to_string(), m.name.clone())))
        .collect()
}

fn media_selected(key: Option<i32>) -> String {
    key.unwrap_or(0).to_string()
}

pub(crate) fn customize() -> Page {
    let mut links = String::from("<ul>");
    for (href, label) in [
        ("/ticket", "Ticket handout and printer"),
        ("/video", "Video player"),
        ("/slideshow", "Slideshow"),
        ("/multimedia/1", "Uploaded media"),
        ("/displayscreen_c/1", "Display screen"),
        ("/touchscreen_c/1", "Touch screen"),
        ("/alias", "Aliases"),
    ] {
        links.push_str(&format!(r#"<li><a href="{href}">{label}</a></li>"#));
    }
    links.push_str("</ul>");
    Page::new("Customization")
        .paragraph("Pick the part of the kiosk to customize.")
        .push(links)
}

pub(crate) fn ticket(printer: &PrinterModel) -> Page {
    let identity = if printer.active {
        format!(
            "0x{:x}_0x{:x}_0x{:x}_0x{:x}",
            printer.vendor, printer.product, printer.in_ep, printer.out_ep
        )
    } else {
        String::new()
    };
    Page::new("Ticket").push(
        Form::post("/ticket")
            .select(
                "value",
                "Tickets are",
                [("1", "Registered on screen"), ("2", "Printed")],
                &printer.value.to_value().to_string(),
            )
            .text("printer", "Printer (vendor_product_inep_outep)", &identity)
            .text("langu", "Ticket language", &printer.langu)
            .number("scale", "Scale", printer.scale)
            .text("header", "Header", &printer.header)
            .finish("Save"),
    )
}

pub(crate) fn video(video: &VideoModel, videos: &[MediaModel]) -> Page {
    let ratios = AspectRatio::iter()
        .map(|ar| (ar.to_value().to_string(), ar.label()))
        .collect::<Vec<_>>();
    Page::new("Video")
        .paragraph(&format!(
            "Current video: {}",
            if video.vname.is_empty() { "none" } else { video.vname.as_str() }
        ))
        .push(
            Form::post("/video")
                .select("video", "Video", media_options(videos), &media_selected(video.vkey))
                .select("ar", "Aspect ratio", ratios, &video.ar.to_value().to_string())
                .select("enable", "Player", toggle_options(), &video.enable.to_value().to_string())
                .select("mute", "Mute", toggle_options(), &video.mute.to_value().to_string())
                .select(
                    "controls",
                    "Controls",
                    toggle_options(),
                    &video.controls.to_value().to_string(),
                )
                .finish("Save"),
        )
}

fn slide_value<'a>(slide: Option<&'a SlideModel>, field: fn(&SlideModel) -> &str) -> &'a str {
    slide.map(field).unwrap_or_default()
}

fn slide_fields(form: Form, slide: Option<&SlideModel>, images: &[MediaModel]) -> Form {
    form.select(
        "background",
        "Background",
        media_options(images),
        &media_selected(slide.and_then(|s| s.ikey)),
    )
    .text("title", "Title", slide_value(slide, |s| s.title.as_str()))
    .text("hsize", "Title size", slide_value(slide, |s| s.hsize.as_str()))
    .text("hcolor", "Title color", slide_value(slide, |s| s.hcolor.as_str()))
    .text("hfont", "Title font", slide_value(slide, |s| s.hfont.as_str()))
    .text("hbg", "Title background", slide_value(slide, |s| s.hbg.as_str()))
    .text("subti", "Subtitle", slide_value(slide, |s| s.subti.as_str()))
    .text("tsize", "Subtitle size", slide_value(slide, |s| s.tsize.as_str()))
    .text("tcolor", "Subtitle color", slide_value(slide, |s| s.tcolor.as_str()))
    .text("tfont", "Subtitle font", slide_value(slide, |s| s.tfont.as_str()))
    .text("tbg", "Subtitle background", slide_value(slide, |s| s.tbg.as_str()))
}

pub(crate) fn slideshow(
    settings: &SlideshowModel,
    slides: &[SlideModel],
    images: &[MediaModel],
) -> Page {
    let status = Toggle::from(settings.status).to_value().to_string();
    let mut page = Page::new("Slideshow").push(
        Form::post("/slide_c")
            .select("status", "Slideshow", toggle_options(), &status)
            .text("rotation", "Rotation (ms)", &settings.rotation)
            .select(
                "navigation",
                "Navigation",
                toggle_options(),
                &settings.navigation.to_value().to_string(),
            )
            .text("effect", "Effect", &settings.effect)
            .finish("Save"),
    );

    page = page.heading("Slides");
    if slides.is_empty() {
        page = page.paragraph("No slides yet.");
    }
    for slide in slides {
        let mut item = format!(
            "<div class=\"slide\"><h3>{}. {}</h3>",
            slide.id,
            escape(&slide.title)
        );
        item.push_str(
            &slide_fields(Form::post(&format!("/slide_e/{}", slide.id)), Some(slide), images)
                .finish("Update"),
        );
        item.push_str(&format!(r#"<a href="/slide_r/{}">Remove</a></div>"#, slide.id));
        page = page.push(item);
    }

    page.heading("Add slide")
        .push(slide_fields(Form::post("/slide_a"), None, images).finish("Add"))
}

pub(crate) fn multimedia(kind: MediaKind, items: &[MediaModel]) -> Page {
    let mut list = String::from("<ul>");
    for media in items {
        list.push_str(&format!(
            r#"<li>{}{} <a href="/multi_del/{}">Delete</a></li>"#,
            escape(&media.name),
            if media.used { " (in use)" } else { "" },
            media.id
        ));
    }
    list.push_str("</ul>");

    let tabs = MediaKind::iter()
        .map(|k| format!(r#"<a href="/multimedia/{}">{}</a>"#, k.code(), k.name()))
        .collect::<Vec<_>>()
        .join(" | ");

    Page::new(&format!("{} files", kind.name()))
        .push(format!("<p>{tabs}</p>"))
        .push(list)
        .push(
            Form::upload(&format!("/multimedia/{}", kind.code()))
                .file("mf", kind.extensions())
                .finish("Upload"),
        )
}

pub(crate) fn display_screen(
    tab: i32,
    display: &DisplayStoreModel,
    languages: &[String],
    images: &[MediaModel],
    audios: &[MediaModel],
) -> Page {
    let announced = display.announce_languages();
    let mut form = Form::post(&format!("/displayscreen_c/{tab}"))
        .select("display", "Template", TEMPLATES, &display.tmp.to_string())
        .select(
            "background",
            "Background",
            media_options(images),
            &media_selected(display.ikey),
        )
        .select(
            "naudio",
            "Notification sound",
            media_options(audios),
            &media_selected(display.akey),
        )
        .text("title", "Title", &display.title)
        .text("hsize", "Title size", &display.hsize)
        .text("hcolor", "Title color", &display.hcolor)
        .text("hfont", "Title font", &display.hfont)
        .text("hbg", "Title background", &display.hbg)
        .text("tsize", "Ticket size", &display.tsize)
        .text("tcolor", "Ticket color", &display.tcolor)
        .text("tfont", "Ticket font", &display.tfont)
        .text("h2size", "Task size", &display.h2size)
        .text("h2color", "Task color", &display.h2color)
        .text("h2font", "Task font", &display.h2font)
        .text("ssize", "Side size", &display.ssize)
        .text("scolor", "Side color", &display.scolor)
        .text("sfont", "Side font", &display.sfont)
        .text("mduration", "Message duration", &display.mduration)
        .text("rrate", "Refresh rate (ms)", &display.rrate)
        .text("effect", "Effect", &display.effect)
        .text("repeats", "Effect repeats", &display.repeats)
        .number("anr", "Announcement repeats", display.anr)
        .select(
            "anrt",
            "Repeat",
            REPEAT_TYPES.iter().map(|t| (*t, *t)),
            &display.anrt,
        )
        .text("bgcolor", "Background color", &display.bgcolor)
        .checkbox("prefix", "Announce office prefix", display.prefix)
        .checkbox(
            "always_show_ticket_number",
            "Always show ticket number",
            display.always_show_ticket_number,
        );
    for lang in languages {
        form = form.checkbox(
            &format!("{ANNOUNCE_CHECK_PREFIX}{lang}"),
            &format!("Announce in {lang}"),
            announced.contains(&lang.as_str()),
        );
    }

    Page::new("Display screen").push(format!(
        r#"<section data-tab="{tab}">{}</section>"#,
        form.finish("Save")
    ))
}

pub(crate) fn touch_screen(
    tab: i32,
    touch: &TouchStoreModel,
    images: &[MediaModel],
    audios: &[MediaModel],
) -> Page {
    let form = Form::post(&format!("/touchscreen_c/{tab}"))
        .select("touch", "Template", TEMPLATES, &touch.tmp.to_string())
        .select(
            "background",
            "Background",
            media_options(images),
            &media_selected(touch.ikey),
        )
        .select(
            "naudio",
            "Notification sound",
            media_options(audios),
            &media_selected(touch.akey),
        )
        .text("title", "Title", &touch.title)
        .text("hsize", "Title size", &touch.hsize)
        .text("hcolor", "Title color", &touch.hcolor)
        .text("hfont", "Title font", &touch.hfont)
        .text("hbg", "Title background", &touch.hbg)
        .text("mbg", "Button background", &touch.mbg)
        .text("tsize", "Task size", &touch.tsize)
        .text("tcolor", "Task color", &touch.tcolor)
        .text("tfont", "Task font", &touch.tfont)
        .text("msize", "Message size", &touch.msize)
        .text("mcolor", "Message color", &touch.mcolor)
        .text("mfont", "Message font", &touch.mfont)
        .text("mduration", "Message duration", &touch.mduration)
        .text("message", "Message", &touch.message);

    Page::new("Touch screen")
        .paragraph(if touch.n {
            "Tickets are registered on screen."
        } else {
            "Tickets are printed."
        })
        .push(format!(
            r#"<section data-tab="{tab}">{}</section>"#,
            form.finish("Save")
        ))
}

pub(crate) fn alias(aliases: &AliasesModel) -> Page {
    Page::new("Aliases").push(
        Form::post("/alias")
            .text("office", "Office", &aliases.office)
            .text("task", "Task", &aliases.task)
            .text("ticket", "Ticket", &aliases.ticket)
            .text("name", "Name", &aliases.name)
            .text("number", "Number", &aliases.number)
            .finish("Save"),
    )
}
