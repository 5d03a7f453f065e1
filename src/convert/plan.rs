use crate::config::ConvertConfig;
use crate::error::Result;
use crate::jmx::{ElementProp, Prop, TestElement};

use super::cookies::build_cookie_manager;
use super::filter::FilteredEntry;
use super::headers::build_header_manager;
use super::sampler::build_sampler;

/// Assemble the full plan: TestPlan → ThreadGroup → one sampler per retained
/// entry, each sampler carrying its own header manager (and, when enabled,
/// a cookie manager for entries with recorded cookies).
pub fn build_plan(entries: &[FilteredEntry<'_>], config: &ConvertConfig) -> Result<TestElement> {
    let mut thread_group = build_thread_group();

    for filtered in entries {
        let request = &filtered.entry.request;
        let mut sampler = build_sampler(filtered.seq, request, config)?;
        sampler
            .children
            .push(build_header_manager(&request.headers, config));
        if config.include_cookies {
            if let Some(cookies) = request.cookies.as_deref().filter(|c| !c.is_empty()) {
                sampler.children.push(build_cookie_manager(cookies));
            }
        }
        thread_group.children.push(sampler);
    }

    let plan = TestElement::new("TestPlan", "TestPlanGui", "TestPlan", config.plan_name.clone())
        .prop(Prop::bool("TestPlan.functional_mode", false))
        .prop(Prop::bool("TestPlan.tearDown_on_shutdown", true))
        .prop(Prop::string("TestPlan.comments", "Generated from HAR"))
        .prop(Prop::string("TestPlan.user_define_classpath", ""))
        .child(thread_group);

    Ok(plan)
}

/// Single user, single iteration: the generated plan is a replay skeleton,
/// load shaping is left to whoever opens it in JMeter.
fn build_thread_group() -> TestElement {
    TestElement::new(
        "ThreadGroup",
        "ThreadGroupGui",
        "ThreadGroup",
        "HAR Thread Group",
    )
    .prop(Prop::string("ThreadGroup.num_threads", "1"))
    .prop(Prop::string("ThreadGroup.ramp_time", "1"))
    .prop(Prop::bool("ThreadGroup.scheduler", false))
    .prop(Prop::string("ThreadGroup.duration", ""))
    .prop(Prop::string("ThreadGroup.delay", ""))
    .prop(Prop::Element(
        ElementProp::new("ThreadGroup.main_controller", "LoopController")
            .with_classes("LoopControlPanel", "LoopController")
            .prop(Prop::bool("LoopController.continue_forever", false))
            .prop(Prop::string("LoopController.loops", "1")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::filter::filter_entries;
    use crate::har::Har;

    fn har(json: &str) -> Har {
        serde_json::from_str(json).unwrap()
    }

    fn plan_for(har: &Har, config: &ConvertConfig) -> TestElement {
        let filtered = filter_entries(&har.log.entries, config).unwrap();
        build_plan(&filtered, config).unwrap()
    }

    const ONE_ENTRY: &str = r#"
    {
      "log": {
        "entries": [
          {
            "request": {
              "method": "GET",
              "url": "https://a.test/",
              "headers": [ { "name": "Accept", "value": "*/*" } ],
              "cookies": [ { "name": "sid", "value": "1" } ]
            }
          }
        ]
      }
    }
    "#;

    #[test]
    fn plan_nests_thread_group_then_samplers() {
        let plan = plan_for(&har(ONE_ENTRY), &ConvertConfig::default());
        assert_eq!(plan.tag, "TestPlan");
        assert_eq!(plan.children.len(), 1);

        let group = &plan.children[0];
        assert_eq!(group.tag, "ThreadGroup");
        assert_eq!(group.children.len(), 1);

        let sampler = &group.children[0];
        assert_eq!(sampler.tag, "HTTPSamplerProxy");
        assert_eq!(sampler.children.len(), 1);
        assert_eq!(sampler.children[0].tag, "HeaderManager");
        assert!(sampler.children[0].children.is_empty());
    }

    #[test]
    fn cookie_manager_is_opt_in() {
        let default_plan = plan_for(&har(ONE_ENTRY), &ConvertConfig::default());
        let sampler = &default_plan.children[0].children[0];
        assert!(sampler.children.iter().all(|c| c.tag != "CookieManager"));

        let mut config = ConvertConfig::default();
        config.include_cookies = true;
        let cookie_plan = plan_for(&har(ONE_ENTRY), &config);
        let sampler = &cookie_plan.children[0].children[0];
        assert!(sampler.children.iter().any(|c| c.tag == "CookieManager"));
    }

    #[test]
    fn entries_without_cookies_get_no_cookie_manager_even_when_enabled() {
        let json = r#"
        { "log": { "entries": [ { "request": { "method": "GET", "url": "https://a.test/" } } ] } }
        "#;
        let mut config = ConvertConfig::default();
        config.include_cookies = true;
        let plan = plan_for(&har(json), &config);
        let sampler = &plan.children[0].children[0];
        assert!(sampler.children.iter().all(|c| c.tag != "CookieManager"));
    }

    #[test]
    fn plan_name_comes_from_config() {
        let mut config = ConvertConfig::default();
        config.plan_name = "Smoke replay".to_string();
        let plan = plan_for(&har(ONE_ENTRY), &config);
        assert_eq!(plan.name, "Smoke replay");
    }

    #[test]
    fn empty_capture_still_produces_a_loadable_skeleton() {
        let plan = plan_for(&har(r#"{ "log": { "entries": [] } }"#), &ConvertConfig::default());
        assert_eq!(plan.children.len(), 1);
        assert!(plan.children[0].children.is_empty());
    }
}
