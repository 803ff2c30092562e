//! Thành phần giao diện timeline bài đăng cho môi trường WebAssembly.

#[cfg(target_arch = "wasm32")]
mod data;
#[cfg(target_arch = "wasm32")]
mod preview;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::data::fetch_posts;
    use crate::preview::{PreviewHandle, TwitterWidgets};
    use crate::styles;
    use serde_wasm_bindgen::from_value;
    use timeline_core::{
        sample_posts, sample_textures, store_scene, AccountTextures, DataSource, HoverChange,
        HoverController, HoverEvent, PatternDef, Point, PostStore, Shape, TimelineConfig,
    };
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, Window};
    use yew::prelude::*;

    #[derive(Clone, Default, PartialEq)]
    struct HoverModel {
        controller: HoverController,
    }

    enum HoverAction {
        Enter { record_id: u32, anchor: Point },
        Leave,
        Retain(PostStore),
    }

    impl Reducible for HoverModel {
        type Action = HoverAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            let mut controller = self.controller.clone();
            let change = match action {
                HoverAction::Enter { record_id, anchor } => {
                    controller.apply(HoverEvent::PointerEnter { record_id, anchor })
                }
                HoverAction::Leave => controller.apply(HoverEvent::PointerLeave),
                HoverAction::Retain(store) => controller.retain_records(&store),
            };

            if change == HoverChange::Unchanged {
                self
            } else {
                Rc::new(Self { controller })
            }
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct TimelineViewProps {
        pub config: TimelineConfig,
        pub textures: AccountTextures,
        pub preview: PreviewHandle,
    }

    #[function_component(TimelineView)]
    fn timeline_view(props: &TimelineViewProps) -> Html {
        let config = &props.config;

        let store = {
            let source = config.data_source.clone();
            use_state(move || match source {
                DataSource::Bundled => PostStore::loaded(sample_posts()),
                DataSource::Fetch { .. } => PostStore::pending(),
            })
        };
        let hover = use_reducer(HoverModel::default);
        let svg_ref = use_node_ref();

        {
            let source = config.data_source.clone();
            let store = store.clone();
            use_effect_with((), move |_| {
                if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                    if let Err(err) = TwitterWidgets.ensure_script(&document) {
                        console::error_1(&err);
                    }
                }

                if let DataSource::Fetch { url } = source {
                    wasm_bindgen_futures::spawn_local(async move {
                        match fetch_posts(&url).await {
                            Ok(records) => store.set(PostStore::loaded(records)),
                            Err(err) => {
                                console::error_1(&err);
                                let mut failed = PostStore::pending();
                                failed.mark_failed();
                                store.set(failed);
                            }
                        }
                    });
                }
                || ()
            });
        }

        {
            let hover = hover.clone();
            let snapshot = (*store).clone();
            use_effect_with(store.generation(), move |_| {
                hover.dispatch(HoverAction::Retain(snapshot));
                || ()
            });
        }

        {
            let preview = props.preview.clone();
            use_effect_with(hover.controller.hovered_id(), move |hovered| {
                if hovered.is_some() {
                    preview.rescan();
                }
                || ()
            });
        }

        let on_enter = {
            let hover = hover.clone();
            let svg_ref = svg_ref.clone();
            Callback::from(move |(record_id, center): (u32, Point)| {
                let Some(svg) = svg_ref.cast::<Element>() else {
                    return;
                };
                let rect = svg.get_bounding_client_rect();
                hover.dispatch(HoverAction::Enter {
                    record_id,
                    anchor: Point::new(rect.left() + center.x, rect.top() + center.y),
                });
            })
        };

        let on_leave = {
            let hover = hover.clone();
            Callback::from(move |_: MouseEvent| hover.dispatch(HoverAction::Leave))
        };

        let Some(scene) = store_scene(&store, &props.textures, config) else {
            return html! {
                <div class="post-timeline-root" style={root_style(config.canvas_width, config.min_height)}>
                    <svg ref={svg_ref} width={config.canvas_width.to_string()} height={config.min_height.to_string()} />
                </div>
            };
        };

        let popup = hover.controller.hovered_id().and_then(|record_id| {
            let record = store.get(record_id)?;
            let position = hover.controller.popup_position(config.popup_offset)?;
            Some((record_id, record.url.clone(), position))
        });

        html! {
            <div class="post-timeline-root" style={root_style(scene.width, scene.height)}>
                <svg ref={svg_ref} width={scene.width.to_string()} height={scene.height.to_string()}>
                    {
                        if scene.patterns.is_empty() {
                            html! {}
                        } else {
                            html! { <defs>{ for scene.patterns.iter().map(render_pattern) }</defs> }
                        }
                    }
                    { for scene.shapes.iter().map(|shape| render_shape(shape, &on_enter, &on_leave)) }
                </svg>
                {
                    match popup {
                        Some((record_id, url, position)) => html! {
                            <div
                                key={record_id.to_string()}
                                class="tooltip"
                                style={format!("left: {}px; top: {}px;", position.x, position.y)}
                                onmouseleave={on_leave.clone()}
                            >
                                <blockquote class="twitter-tweet">
                                    <a href={url}></a>
                                </blockquote>
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
        }
    }

    fn root_style(width: f64, height: f64) -> String {
        format!("width: {width}px; height: {height}px;")
    }

    fn render_pattern(pattern: &PatternDef) -> Html {
        let size = pattern.size.to_string();
        html! {
            <pattern id={pattern.id.clone()} patternUnits="objectBoundingBox" width="1" height="1">
                <image
                    href={pattern.image_href.clone()}
                    x="0"
                    y="0"
                    width={size.clone()}
                    height={size}
                    preserveAspectRatio="xMidYMid slice"
                />
            </pattern>
        }
    }

    fn render_shape(
        shape: &Shape,
        on_enter: &Callback<(u32, Point)>,
        on_leave: &Callback<MouseEvent>,
    ) -> Html {
        match shape {
            Shape::Line {
                class,
                from,
                to,
                stroke,
                stroke_width,
                opacity,
            } => html! {
                <line
                    class={class.clone()}
                    x1={from.x.to_string()}
                    y1={from.y.to_string()}
                    x2={to.x.to_string()}
                    y2={to.y.to_string()}
                    stroke={stroke.clone()}
                    stroke-width={stroke_width.to_string()}
                    opacity={opacity.to_string()}
                />
            },
            Shape::Text {
                class,
                position,
                anchor,
                content,
            } => html! {
                <text
                    class={class.clone()}
                    x={position.x.to_string()}
                    y={position.y.to_string()}
                    text-anchor={anchor.as_str()}
                    dominant-baseline="middle"
                >
                    { content.clone() }
                </text>
            },
            Shape::Marker {
                record_id,
                center,
                radius,
                fill,
                stroke,
                stroke_width,
                ..
            } => {
                let onmouseenter = {
                    let on_enter = on_enter.clone();
                    let payload = (*record_id, *center);
                    Callback::from(move |_: MouseEvent| on_enter.emit(payload))
                };
                html! {
                    <circle
                        class="timeline-dot"
                        data-id={record_id.to_string()}
                        cx={center.x.to_string()}
                        cy={center.y.to_string()}
                        r={radius.to_string()}
                        fill={fill.css_value()}
                        stroke={stroke.clone()}
                        stroke-width={stroke_width.to_string()}
                        {onmouseenter}
                        onmouseleave={on_leave.clone()}
                    />
                }
            }
        }
    }

    #[wasm_bindgen]
    pub fn mount_timeline_view(
        selector: &str,
        config: JsValue,
        textures: JsValue,
    ) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let config: TimelineConfig = if config.is_undefined() || config.is_null() {
            TimelineConfig::default()
        } else {
            from_value(config)?
        };
        let textures: AccountTextures = if textures.is_undefined() || textures.is_null() {
            sample_textures()
        } else {
            from_value(textures)?
        };

        let props = TimelineViewProps {
            config,
            textures,
            preview: PreviewHandle(Rc::new(TwitterWidgets)),
        };
        yew::Renderer::<TimelineView>::with_root_and_props(target, props).render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_timeline_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_timeline_view(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "timeline-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
