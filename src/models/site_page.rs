//! SharePoint site pages and their web parts

use super::Entity;
use chrono::{DateTime, FixedOffset};

graph_enum! {
    pub enum PageLayoutType {
        MicrosoftReserved => "microsoftReserved",
        Article => "article",
        Home => "home",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum PagePromotionType {
        MicrosoftReserved => "microsoftReserved",
        Page => "page",
        NewsPost => "newsPost",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum TitleAreaLayoutType {
        ImageAndTitle => "imageAndTitle",
        Plain => "plain",
        ColorBlock => "colorBlock",
        Overlap => "overlap",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum TitleAreaTextAlignmentType {
        Left => "left",
        Center => "center",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_model! {
    pub struct MetaDataKeyStringPair {
        "key" => key / set_key: String,
        "value" => value / set_value: String,
    }
}

graph_model! {
    /// Content rendered by the server for a web part or title area
    pub struct ServerProcessedContent {
        "componentDependencies" => component_dependencies / set_component_dependencies: Vec<MetaDataKeyStringPair>,
        "htmlStrings" => html_strings / set_html_strings: Vec<MetaDataKeyStringPair>,
        "imageSources" => image_sources / set_image_sources: Vec<MetaDataKeyStringPair>,
        "links" => links / set_links: Vec<MetaDataKeyStringPair>,
        "searchablePlainTexts" => searchable_plain_texts / set_searchable_plain_texts: Vec<MetaDataKeyStringPair>,
    }
}

graph_model! {
    pub struct TitleArea {
        "alternativeText" => alternative_text / set_alternative_text: String,
        "enableGradientEffect" => enable_gradient_effect / set_enable_gradient_effect: bool,
        "imageWebUrl" => image_web_url / set_image_web_url: String,
        "layout" => layout / set_layout: TitleAreaLayoutType,
        "serverProcessedContent" => server_processed_content / set_server_processed_content: ServerProcessedContent,
        "showAuthor" => show_author / set_show_author: bool,
        "showPublishedDate" => show_published_date / set_show_published_date: bool,
        "showTextBlockAboveTitle" => show_text_block_above_title / set_show_text_block_above_title: bool,
        "textAboveTitle" => text_above_title / set_text_above_title: String,
        "textAlignment" => text_alignment / set_text_alignment: TitleAreaTextAlignmentType,
    }
}

graph_model! {
    /// Publishing status of a page or item version
    pub struct PublicationFacet {
        /// The state of publication for this document. Either published or checkout.
        "level" => level / set_level: String,
        "versionId" => version_id / set_version_id: String,
    }
}

graph_model! {
    pub struct BaseItem: Entity {
        "createdDateTime" => created_date_time / set_created_date_time: DateTime<FixedOffset>,
        "description" => description / set_description: String,
        "eTag" => e_tag / set_e_tag: String,
        "lastModifiedDateTime" => last_modified_date_time / set_last_modified_date_time: DateTime<FixedOffset>,
        "name" => name / set_name: String,
        "webUrl" => web_url / set_web_url: String,
    }
}

graph_model! {
    pub struct WebPart: Entity {}
}

graph_model! {
    /// A web part holding formatted text
    pub struct TextWebPart: WebPart = "#microsoft.graph.textWebPart" {
        "innerHtml" => inner_html / set_inner_html: String,
    }
}

graph_model! {
    /// A web part other than text. Its `data` payload stays in additional data.
    pub struct StandardWebPart: WebPart = "#microsoft.graph.standardWebPart" {
        "dataVersion" => data_version / set_data_version: String,
        /// A Guid which indicates the type of the webParts
        "webPartType" => web_part_type / set_web_part_type: String,
    }
}

graph_family! {
    pub enum WebPartKind {
        base WebPart = "#microsoft.graph.webPart";
        variants {
            StandardWebPart = "#microsoft.graph.standardWebPart",
            TextWebPart = "#microsoft.graph.textWebPart",
        }
        nested {}
    }
}

graph_model! {
    pub struct SitePage: BaseItem = "#microsoft.graph.sitePage" {
        "pageLayout" => page_layout / set_page_layout: PageLayoutType,
        "promotionKind" => promotion_kind / set_promotion_kind: PagePromotionType,
        "publishingState" => publishing_state / set_publishing_state: PublicationFacet,
        "showComments" => show_comments / set_show_comments: bool,
        "showRecommendedPages" => show_recommended_pages / set_show_recommended_pages: bool,
        "thumbnailWebUrl" => thumbnail_web_url / set_thumbnail_web_url: String,
        "title" => title / set_title: String,
        "titleArea" => title_area / set_title_area: TitleArea,
        /// Collection of webparts on the SharePoint page
        "webParts" => web_parts / set_web_parts: Vec<WebPartKind>,
    }
}

graph_family! {
    pub enum BaseItemKind {
        base BaseItem = "#microsoft.graph.baseItem";
        variants {
            SitePage = "#microsoft.graph.sitePage",
        }
        nested {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{check_enum, decode, round_trip};
    use crate::serialization::{AdditionalDataHolder, Family};
    use serde_json::json;

    #[test]
    fn test_enums_round_trip() {
        check_enum::<PageLayoutType>();
        check_enum::<PagePromotionType>();
        check_enum::<TitleAreaLayoutType>();
        check_enum::<TitleAreaTextAlignmentType>();
    }

    #[test]
    fn test_site_page_with_web_parts() {
        let kind: BaseItemKind = decode(json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "id": "page-1",
            "name": "Home.aspx",
            "title": "Home",
            "pageLayout": "home",
            "promotionKind": "page",
            "publishingState": {"level": "published", "versionId": "1.0"},
            "titleArea": {
                "layout": "colorBlock",
                "textAlignment": "center",
                "serverProcessedContent": {
                    "htmlStrings": [{"key": "title", "value": "<b>Home</b>"}],
                },
            },
            "webParts": [
                {"@odata.type": "#microsoft.graph.textWebPart", "id": "wp-1", "innerHtml": "<p>Hi</p>"},
                {
                    "@odata.type": "#microsoft.graph.standardWebPart",
                    "id": "wp-2",
                    "webPartType": "d1d91016-032f-456d-98a4-721247c305e8",
                    "data": {"title": "Image"},
                },
                {"@odata.type": "#microsoft.graph.futureWebPart", "id": "wp-3"},
            ],
        }));

        let BaseItemKind::SitePage(page) = &kind else {
            panic!("unexpected variant: {:?}", kind);
        };
        assert_eq!(page.base().name().map(String::as_str), Some("Home.aspx"));
        assert_eq!(page.page_layout(), Some(&PageLayoutType::Home));
        assert_eq!(
            page.publishing_state().and_then(|state| state.level()).map(String::as_str),
            Some("published")
        );

        let title_area = page.title_area().unwrap();
        assert_eq!(title_area.layout(), Some(&TitleAreaLayoutType::ColorBlock));
        let html = title_area
            .server_processed_content()
            .and_then(|content| content.html_strings())
            .unwrap();
        assert_eq!(html[0].value().map(String::as_str), Some("<b>Home</b>"));

        let parts = page.web_parts().unwrap();
        assert!(matches!(&parts[0], WebPartKind::TextWebPart(text)
            if text.inner_html().map(String::as_str) == Some("<p>Hi</p>")));
        let WebPartKind::StandardWebPart(standard) = &parts[1] else {
            panic!("unexpected variant: {:?}", parts[1]);
        };
        assert_eq!(standard.additional_data().get("data"), Some(&json!({"title": "Image"})));
        assert!(matches!(&parts[2], WebPartKind::WebPart(_)));
        assert_eq!(parts[2].odata_type_name(), "#microsoft.graph.webPart");
    }

    #[test]
    fn test_site_page_round_trip() {
        let mut text = TextWebPart::new();
        text.set_inner_html(Some("<h1>News</h1>".to_string()));

        let mut page = SitePage::new();
        page.set_title(Some("News".to_string()));
        page.set_promotion_kind(Some(PagePromotionType::NewsPost));
        page.set_web_parts(Some(vec![text.into(), WebPartKind::base()]));
        page.base_mut().set_web_url(Some("https://contoso.sharepoint.com/sites/news".to_string()));

        let (payload, decoded) = round_trip(&page);
        assert_eq!(decoded, page);
        assert_eq!(payload["@odata.type"], json!("#microsoft.graph.sitePage"));
        assert_eq!(payload["webParts"][0]["@odata.type"], json!("#microsoft.graph.textWebPart"));
        assert_eq!(payload["webParts"][1], json!({}));
    }
}
