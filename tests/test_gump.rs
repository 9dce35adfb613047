//=========================================================================
// Scripted Scene Integration Test
//=========================================================================
//
// Builds the sample menu (backgrounds, images, a button with per-state
// styling, cliloc labels, an alpha region) and drives it the way a host
// would: hit-testing, dispatch, frame building.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use aetheric_gump::core::style::ColorMode;
use aetheric_gump::prelude::*;

//=== Helpers =============================================================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Scene {
    gump: Gump,
    background: WidgetId,
    i1: WidgetId,
    i2: WidgetId,
    button: WidgetId,
    label: WidgetId,
    clicks: Rc<RefCell<Vec<Option<String>>>>,
}

fn build_scene() -> aetheric_gump::core::Result<Scene> {
    let mut g = Gump::new(30, 30);
    let clicks = Rc::new(RefCell::new(Vec::new()));

    let background = g.add_background((0, 0, 500, 500), 3000);
    g.widget_mut(background)?.set_rgba(Rgba::from_hex("#ff0000")?);

    let i1 = g.add_image((0, 0, 100, 100), TextureRef::theme("images/button.png"));
    {
        let w = g.widget_mut(i1)?;
        w.as_image_mut()?.set_texture(TextureRef::gump_art(13));
        w.set_geometry((30, 30));
        w.set_hue(13)?;
    }

    let i2 = g.add_image((0, 0), TextureRef::gump_art(12));
    {
        let w = g.widget_mut(i2)?;
        w.set_rgba(Rgba::rgb(0.8, 0.2, 0.0)?);
        w.set_alpha(0.6)?;
        w.set_hue(2)?;
    }

    let log = Rc::clone(&clicks);
    let button = g.add_button((10, 10, 100, 60), TextureRef::theme("images/button.png"), move |ctx| {
        let button = ctx.button_mut()?;
        button.set_rgba(Rgba::rgb(1.0, 0.0, 1.0)?);
        log.borrow_mut().push(button.name().map(str::to_string));

        ctx.gump_mut().component_mut("i1")?.set_hue(90)?;
        ctx.gump_mut().store_get_mut("i2")?.set_rgba(Rgba::from_channels(91, 91, 91, 255)?);
        Ok(())
    });
    {
        let b = g.widget_mut(button)?.as_button_mut()?;
        b.mouseover_mut().styling.set_hue(13)?;
        b.mousedown_mut().styling.set_rgba(Rgba::rgb(1.0, 1.0, 0.0)?);
        b.set_text("foooobert");
        b.mousedown_mut().font_styling.set_rgba(Rgba::from_channels(4, 4, 4, 255)?);
        b.mouseover_mut().font_styling.set_rgba(Rgba::from_hex("#00ffff")?);
        b.set_font("Arial", 8)?;
    }

    g.set_name(i1, "i1")?;
    g.store_insert("i2", i2)?;

    g.add_alpha_region((50, 50, 100, 100), 0.9)?;

    let label = g.add_label(300, 300, LocalizedString::new(501522));
    g.widget_mut(label)?.as_label_mut()?.set_halign(HAlign::Right);

    Ok(Scene { gump: g, background, i1, i2, button, label, clicks })
}

fn click(dispatcher: &mut EventDispatcher, gump: &mut Gump, id: WidgetId) -> aetheric_gump::core::Result<DispatchOutcome> {
    dispatcher.dispatch(gump, PointerEvent::enter(id))?;
    dispatcher.dispatch(gump, PointerEvent::press(id))?;
    dispatcher.dispatch(gump, PointerEvent::release(id))
}

//=========================================================================
// Construction
//=========================================================================

#[test]
fn scene_builds_with_expected_styling() {
    init_logging();
    let s = build_scene().unwrap();

    assert_eq!(s.gump.len(), 6);

    let i1 = s.gump.widget(s.i1).unwrap();
    assert_eq!(i1.geometry(), Geometry::Point { x: 30, y: 30 });
    assert_eq!(i1.as_image().unwrap().texture(), &TextureRef::gump_art(13));
    assert_eq!(i1.styling().hue(), Some(13));

    let i2 = s.gump.widget(s.i2).unwrap();
    assert_eq!(i2.styling().mode(), ColorMode::Hue);
    assert_eq!(i2.styling().hue(), Some(2));
    assert_eq!(i2.styling().alpha(), 0.6);

    let label = s.gump.widget(s.label).unwrap().as_label().unwrap();
    assert_eq!(label.halign(), HAlign::Right);
}

#[test]
fn name_and_store_are_independent() {
    let s = build_scene().unwrap();

    assert_eq!(s.gump.component("i1").unwrap().id(), s.i1);
    assert!(matches!(s.gump.store_get("i1"), Err(GumpError::NotFound(_))));

    assert_eq!(s.gump.store_get("i2").unwrap().id(), s.i2);
    assert!(matches!(s.gump.component("i2"), Err(GumpError::NotFound(_))));
}

//=========================================================================
// Dispatch
//=========================================================================

#[test]
fn click_runs_callback_against_scene() {
    init_logging();
    let mut s = build_scene().unwrap();
    let mut dispatcher = EventDispatcher::new();

    let outcome = click(&mut dispatcher, &mut s.gump, s.button).unwrap();
    assert_eq!(outcome, DispatchOutcome::Clicked { widget: s.button, server_button: None });
    assert_eq!(*s.clicks.borrow(), vec![None]);

    let button = s.gump.widget(s.button).unwrap();
    assert_eq!(button.styling().rgba(), Some(Rgba::rgb(1.0, 0.0, 1.0).unwrap()));
    assert_eq!(button.as_button().unwrap().state(), ButtonState::MouseOver);

    assert_eq!(s.gump.component("i1").unwrap().styling().hue(), Some(90));
    assert_eq!(
        s.gump.store_get("i2").unwrap().styling().rgba(),
        Some(Rgba::from_channels(91, 91, 91, 255).unwrap())
    );
}

#[test]
fn release_elsewhere_does_not_click() {
    let mut s = build_scene().unwrap();
    let mut dispatcher = EventDispatcher::new();

    dispatcher.dispatch(&mut s.gump, PointerEvent::press(s.button)).unwrap();
    dispatcher.dispatch(&mut s.gump, PointerEvent::leave(s.button)).unwrap();
    dispatcher.dispatch(&mut s.gump, PointerEvent::release(s.background)).unwrap();

    assert!(s.clicks.borrow().is_empty());
    assert_eq!(
        s.gump.widget(s.button).unwrap().as_button().unwrap().state(),
        ButtonState::Normal
    );
}

//=========================================================================
// Frame Building
//=========================================================================

#[test]
fn frame_resolves_labels_and_keeps_order() {
    let s = build_scene().unwrap();
    let mut table = ClilocTable::new();
    table.insert(501522, "Hello there");

    let frame = s.gump.frame(&UnresolvedTextures, &table);
    let order: Vec<WidgetId> = frame.iter().map(|c| c.widget).collect();
    assert_eq!(order, s.gump.render_order());
    assert_eq!(order.first(), Some(&s.background));

    let label = frame.iter().find(|c| c.widget == s.label).unwrap();
    assert_eq!(
        label.primitive,
        DrawPrimitive::Label { text: "Hello there".into(), halign: HAlign::Right }
    );
    assert_eq!(label.rect.x, 330);

    let fallback = s.gump.frame(&UnresolvedTextures, &NoLocalizer);
    let label = fallback.iter().find(|c| c.widget == s.label).unwrap();
    assert!(matches!(&label.primitive, DrawPrimitive::Label { text, .. } if text == "<cliloc #501522>"));
}

#[test]
fn point_images_use_resolved_sizes() {
    let s = build_scene().unwrap();
    let sizes = |texture: &TextureRef| match texture {
        TextureRef::GumpArt(12) => Some((44u32, 22u32)),
        _ => None,
    };

    let frame = s.gump.frame(&sizes, &NoLocalizer);

    let i2 = frame.iter().find(|c| c.widget == s.i2).unwrap();
    assert_eq!(i2.rect, Rect::new(30, 30, 44, 22));
    assert!(!i2.auto_resize);

    let i1 = frame.iter().find(|c| c.widget == s.i1).unwrap();
    assert_eq!(i1.rect, Rect::new(60, 60, 1, 1));
    assert!(i1.auto_resize);
}

//=========================================================================
// Host Loop
//=========================================================================

#[test]
fn routed_pointer_input_clicks_through_runtime() {
    init_logging();
    let s = build_scene().unwrap();
    let clicks = Rc::clone(&s.clicks);
    let button = s.button;

    let (mut runtime, host) = GumpRuntimeBuilder::new()
        .with_idle_sleep(Duration::ZERO)
        .build(s.gump);
    let mut router = PointerRouter::new();

    let mut batch = Vec::new();
    for input in [
        RawPointerInput::Moved { x: 50, y: 50 },
        RawPointerInput::Pressed,
        RawPointerInput::Released,
    ] {
        batch.extend(router.route(input, runtime.gump(), &UnresolvedTextures));
    }
    assert_eq!(router.hovered(), Some(button));

    host.send(HostEvent::Pointer(batch)).unwrap();
    host.send(HostEvent::Close).unwrap();

    let mut frames = 0;
    runtime.run_until_closed(|_| frames += 1);

    assert_eq!(frames, 1);
    assert_eq!(clicks.borrow().len(), 1);
    runtime.close();
}
