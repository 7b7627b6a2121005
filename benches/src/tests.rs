use toxml::Options;

use crate::context::{Feed, Item};
use crate::{Document, Elements, Lazy, Prebuilt};

fn feed() -> Feed {
    Feed {
        title: "My awesome feed!".to_owned(),
        link: "https://example.com/?a=1&b=2".to_owned(),
        items: vec![
            Item {
                title: "Nancy Wheeler".to_owned(),
                description: "1 < 2".to_owned(),
                rank: 17,
                is_draft: false,
                tags: vec!["a".to_owned(), "b".to_owned()],
            },
            Item {
                title: "Billy Hargrove".to_owned(),
                description: "&amp; friends".to_owned(),
                rank: 19,
                is_draft: true,
                tags: vec![],
            },
        ],
    }
}

fn render<D: Document>(options: &Options) -> String {
    D::prepare(&feed()).render(options)
}

#[test]
fn serde() {
    let xml = toxml::to_xml(&feed(), &Options::default()).unwrap();
    assert_eq!(
        xml,
        "<title>My awesome feed!</title>\
         <link>https://example.com/?a=1&amp;b=2</link>\
         <items>\
         <title>Nancy Wheeler</title><description>1 &lt; 2</description><rank>17</rank><is_draft>false</is_draft><tags>a</tags><tags>b</tags>\
         <title>Billy Hargrove</title><description>&amp; friends</description><rank>19</rank><is_draft>true</is_draft><tags/>\
         </items>"
    );
}

#[test]
fn value() {
    let expected = toxml::to_xml(&feed(), &Options::default()).unwrap();
    assert_eq!(render::<Prebuilt>(&Options::default()), expected);
}

#[test]
fn element() {
    let options = Options::builder().indent("  ").build();
    assert_eq!(
        render::<Elements>(&options),
        r#"<!-- generated -->
<rss version="2.0">
  <channel>
    <title>My awesome feed!</title>
    <link>https://example.com/?a=1&amp;b=2</link>
    <items>
      <item rank="17" draft="false">
        <title>Nancy Wheeler</title>
        <description>1 &lt; 2</description>
        <tag>a</tag>
        <tag>b</tag>
      </item>
      <item rank="19" draft>
        <title>Billy Hargrove</title>
        <description>&amp; friends</description>
      </item>
    </items>
  </channel>
</rss>"#
    );
}

#[test]
fn thunk() {
    let options = Options::default();
    assert_eq!(render::<Lazy>(&options), render::<Elements>(&options));
}
