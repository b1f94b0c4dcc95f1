use dioxus::prelude::*;

use common::page_props::{PageBundle, PageResolution};
use common::wiki_page::{WikiPageProps, heading_slug};

use crate::api::page_api::get_wiki_page;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::not_found::NotFoundView;
use crate::components::page_meta::SharedMetaFooter;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::markdown::{MdBlock, parse_markdown_blocks};


#[component]
pub fn WikiPage(page_slug: ReadSignal<Vec<String>>) -> Element {
    let slug = use_memo(move || page_slug.read().join("/"));
    let resource = use_resource(move || {
        let slug = slug.read().clone();
        async move { get_wiki_page(slug).await }
    });

    let body = match &*resource.read_unchecked() {
        None => rsx! { LoadingIndicator {} },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay { error_txt: e.to_string() }
        },
        Some(Ok(PageResolution::NotFound)) => rsx! {
            NotFoundView { message: "This wiki page does not exist.".to_string() }
        },
        Some(Ok(PageResolution::Found(bundle))) => rsx! {
            WikiPageContent { bundle: bundle.clone() }
        },
    };

    rsx! {
        Title { "ThemeBase Wiki: {slug}" }
        div {
            id: "x-wiki-page",
            style: "
                width: 100%;
                height: 100%;
                padding: 30px 40px;
                box-sizing: border-box;
                background-color: #F5F6F8;
                overflow-y: auto;
            ",
            {body}
        }
    }
}

#[component]
fn WikiPageContent(bundle: ReadSignal<PageBundle<WikiPageProps>>) -> Element {
    let bundle = bundle.read();
    let props = bundle.props.clone();
    let blocks = parse_markdown_blocks(&props.body);
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 40px;
                align-items: flex-start;
            ",
            div {
                style: "flex-grow: 1; max-width: 760px;",
                h1 {
                    style: "font-size: 36px; color: #1C212D;",
                    "{props.name}"
                }
                for block in blocks {
                    MdBlockView { block }
                }
                SharedMetaFooter { shared: bundle.shared.clone() }
            }
            if !props.headings.is_empty() {
                TableOfContents { props: props.clone() }
            }
        }
    }
}

#[component]
fn TableOfContents(props: ReadSignal<WikiPageProps>) -> Element {
    rsx! {
        div {
            id: "x-wiki-toc",
            style: "
                position: sticky;
                top: 20px;
                min-width: 200px;
                padding: 14px;
                border: 1px solid #DDDDDD;
                border-radius: 5px;
                background-color: #FFFFFF;
            ",
            span {
                style: "font-size: 14px; font-weight: 600; color: #555555;",
                "On this page"
            }
            ul {
                style: "list-style: none; padding: 0; margin: 10px 0 0 0;",
                for heading in props.read().headings.clone() {
                    li {
                        style: if heading.depth == 3 { "margin-left: 14px;" } else { "" },
                        a {
                            href: "#{heading.slug}",
                            style: "color: #FF2F64; font-size: 14px; text-decoration: none;",
                            "{heading.text}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MdBlockView(block: ReadSignal<MdBlock>) -> Element {
    match block.read().clone() {
        MdBlock::Heading { depth: 1, text } => rsx! {
            h1 { style: "font-size: 32px; color: #1C212D;", "{text}" }
        },
        MdBlock::Heading { depth: 2, text } => rsx! {
            h2 {
                id: "{heading_slug(&text)}",
                style: "font-size: 26px; color: #1C212D; margin-top: 28px;",
                "{text}"
            }
        },
        MdBlock::Heading { text, .. } => rsx! {
            h3 {
                id: "{heading_slug(&text)}",
                style: "font-size: 20px; color: #1C212D; margin-top: 20px;",
                "{text}"
            }
        },
        MdBlock::Paragraph(text) => rsx! {
            p { style: "font-size: 16px; line-height: 1.6; color: #333333;", "{text}" }
        },
        MdBlock::List(items) => rsx! {
            ul {
                for item in items {
                    li { style: "font-size: 16px; line-height: 1.6; color: #333333;", "{item}" }
                }
            }
        },
        MdBlock::CodeBlock(code) => rsx! {
            pre {
                style: "
                    padding: 12px;
                    border-radius: 5px;
                    background-color: #1C212D;
                    color: #F5F6F8;
                    overflow-x: auto;
                ",
                "{code}"
            }
        },
    }
}
