//! Clip page use case
//!
//! The click-triggered workflow: validate the tab and its URL scheme,
//! check the file-access grant when needed, snapshot the page, route the
//! HTML through the parsing boundary, write the result back into the
//! page's clipboard, and report exactly one outcome.

use std::sync::Arc;

use url::Url;

use crate::domain::{
    validate_parsed, Activation, Notice, Outcome, ParsedIssue, BADGE_CLEAR_DELAY, BADGE_COLOR,
    BADGE_TEXT,
};
use crate::domain::outcome::HostFault;

use super::ports::{
    ActionBadge, CopyInjection, ExtractError, FileAccessCheck, Notifier, PageClipboard,
    PageExtractor, ParserBoundary, ParserError,
};

/// URL schemes extension scripts may run on. Everything else (internal
/// pages, data URLs, ...) is refused before extraction.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "file"];

enum FileAccessDecision {
    Allowed,
    Denied,
    Undetermined,
}

/// One-shot clip workflow, written once against the uniform parsing
/// boundary regardless of its deployment shape.
pub struct ClipPageUseCase<E, P, C, B, N, F>
where
    E: PageExtractor,
    P: ParserBoundary,
    C: PageClipboard,
    B: ActionBadge + 'static,
    N: Notifier,
    F: FileAccessCheck,
{
    extractor: E,
    parser: P,
    page_clipboard: C,
    badge: Arc<B>,
    notifier: N,
    file_access: F,
}

impl<E, P, C, B, N, F> ClipPageUseCase<E, P, C, B, N, F>
where
    E: PageExtractor,
    P: ParserBoundary,
    C: PageClipboard,
    B: ActionBadge + 'static,
    N: Notifier,
    F: FileAccessCheck,
{
    /// Create a new use case instance
    pub fn new(
        extractor: E,
        parser: P,
        page_clipboard: C,
        badge: Arc<B>,
        notifier: N,
        file_access: F,
    ) -> Self {
        Self {
            extractor,
            parser,
            page_clipboard,
            badge,
            notifier,
            file_access,
        }
    }

    /// Execute the clip workflow for one activation and report the result.
    ///
    /// Every failure produces exactly one notification; success sets the
    /// transient badge instead. The returned outcome is the same one that
    /// was reported.
    pub async fn execute(&self, activation: Activation) -> Outcome {
        let outcome = self.run(&activation).await;
        self.report(&activation, &outcome).await;
        outcome
    }

    async fn run(&self, activation: &Activation) -> Outcome {
        // validate-tab
        let Some(url_str) = activation.url.as_deref() else {
            return Outcome::TabUrlMissing;
        };

        // validate-protocol
        let url = match Url::parse(url_str) {
            Ok(url) => url,
            Err(_) => {
                return Outcome::InvalidUrl {
                    url: url_str.to_string(),
                }
            }
        };
        let scheme = url.scheme();
        if !ALLOWED_SCHEMES.contains(&scheme) {
            return Outcome::ProtocolNotAllowed {
                scheme: scheme.to_string(),
            };
        }

        // validate-file-access, only for the file scheme
        if scheme == "file" {
            match self.check_file_access().await {
                FileAccessDecision::Allowed => {}
                FileAccessDecision::Denied => return Outcome::FileAccessDenied,
                FileAccessDecision::Undetermined => return Outcome::FileAccessUndetermined,
            }
        }

        // extract-html
        let html = match self.extractor.extract_html(activation).await {
            Ok(html) => html,
            Err(e) => return Self::classify_extract_error(e),
        };
        if html.trim().is_empty() {
            return Outcome::ExtractionFailed {
                detail: "The page returned an empty document.".to_string(),
            };
        }

        // ensure-parser + parse; the boundary owns its own lifecycle
        let parsed = match self.parser.parse(&html).await {
            Ok(parsed) => parsed,
            Err(e) => return Self::classify_parser_error(e),
        };

        // validate-parsed-result: never hand an empty or sentinel result
        // to the clipboard writer
        if let Err(issue) = validate_parsed(&parsed) {
            return match issue {
                ParsedIssue::Empty => Outcome::NoData,
                ParsedIssue::Sentinel => Outcome::SentinelResult,
            };
        }

        // copy-to-clipboard
        match self
            .page_clipboard
            .copy_in_page(activation.tab_id, &parsed)
            .await
        {
            CopyInjection::Copied => Outcome::Success,
            CopyInjection::Refused => Outcome::CopyFailed {
                detail: "The copy routine returned an error. Check the active tab's console."
                    .to_string(),
            },
            CopyInjection::Failed(message) => Outcome::CopyFailed {
                detail: format!("Error while running the copy script: {message}"),
            },
            CopyInjection::NoResult => Outcome::CopyFailed {
                detail: "The copy script returned no result.".to_string(),
            },
        }
    }

    /// Try the primary check method, falling back to the legacy
    /// callback-based one when the primary is unavailable. If neither can
    /// answer, the grant is treated as undeterminable, not as granted.
    async fn check_file_access(&self) -> FileAccessDecision {
        let allowed = match self.file_access.is_allowed().await {
            Ok(allowed) => allowed,
            Err(_) => match self.file_access.is_allowed_legacy().await {
                Ok(allowed) => allowed,
                Err(_) => return FileAccessDecision::Undetermined,
            },
        };

        if allowed {
            FileAccessDecision::Allowed
        } else {
            FileAccessDecision::Denied
        }
    }

    fn classify_extract_error(error: ExtractError) -> Outcome {
        match error {
            ExtractError::MissingHostPermission => {
                Outcome::HostFault(HostFault::MissingHostPermission)
            }
            ExtractError::FileUrlBlocked => Outcome::HostFault(HostFault::FileUrlInaccessible),
            ExtractError::NoResult => Outcome::ExtractionFailed {
                detail: "The injection returned no result.".to_string(),
            },
            ExtractError::Failed(detail) => Outcome::ExtractionFailed { detail },
        }
    }

    fn classify_parser_error(error: ParserError) -> Outcome {
        match error {
            ParserError::Setup(detail) => Outcome::ParserSetup { detail },
            ParserError::Parse { message, stack } => Outcome::ParseFailed { message, stack },
            ParserError::Inactive(_) => Outcome::HostFault(HostFault::ParserInactive),
            ParserError::ChannelClosed(_) => Outcome::HostFault(HostFault::ChannelBroken),
        }
    }

    async fn report(&self, activation: &Activation, outcome: &Outcome) {
        match outcome {
            Outcome::Success => {
                let tab_id = activation.tab_id;
                if self.badge.set(tab_id, BADGE_TEXT, BADGE_COLOR).await.is_ok() {
                    let badge = Arc::clone(&self.badge);
                    tokio::spawn(async move {
                        tokio::time::sleep(BADGE_CLEAR_DELAY).await;
                        let _ = badge.clear(tab_id).await;
                    });
                }
            }
            failure => {
                if let Some(notice) = Notice::for_outcome(failure) {
                    let _ = self.notifier.notify(&notice).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoticeId, PARSE_FAILURE_SENTINEL};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::application::ports::{
        BadgeError, FileAccessError, NotificationError,
    };
    use crate::domain::TabId;

    // Mock implementations for testing

    struct MockExtractor {
        result: Result<String, ExtractError>,
        calls: AtomicUsize,
    }

    impl MockExtractor {
        fn ok(html: &str) -> Self {
            Self {
                result: Ok(html.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn err(error: ExtractError) -> Self {
            Self {
                result: Err(error),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PageExtractor for MockExtractor {
        async fn extract_html(&self, _activation: &Activation) -> Result<String, ExtractError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct MockParser {
        result: Result<String, ParserError>,
    }

    impl MockParser {
        fn ok(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
            }
        }

        fn err(error: ParserError) -> Self {
            Self { result: Err(error) }
        }
    }

    #[async_trait]
    impl ParserBoundary for MockParser {
        async fn parse(&self, _html: &str) -> Result<String, ParserError> {
            self.result.clone()
        }
    }

    struct RecordingClipboard {
        response: CopyInjection,
        copies: Mutex<Vec<String>>,
    }

    impl RecordingClipboard {
        fn responding(response: CopyInjection) -> Self {
            Self {
                response,
                copies: Mutex::new(Vec::new()),
            }
        }

        fn copied_texts(&self) -> Vec<String> {
            self.copies.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageClipboard for RecordingClipboard {
        async fn copy_in_page(&self, _tab_id: TabId, text: &str) -> CopyInjection {
            self.copies.lock().unwrap().push(text.to_string());
            self.response.clone()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum BadgeEvent {
        Set(String, String),
        Clear,
    }

    #[derive(Default)]
    struct RecordingBadge {
        events: Mutex<Vec<BadgeEvent>>,
    }

    impl RecordingBadge {
        fn events(&self) -> Vec<BadgeEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ActionBadge for RecordingBadge {
        async fn set(&self, _tab_id: TabId, text: &str, color: &str) -> Result<(), BadgeError> {
            self.events
                .lock()
                .unwrap()
                .push(BadgeEvent::Set(text.to_string(), color.to_string()));
            Ok(())
        }

        async fn clear(&self, _tab_id: TabId) -> Result<(), BadgeError> {
            self.events.lock().unwrap().push(BadgeEvent::Clear);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
            self.notices.lock().unwrap().push(notice.clone());
            Ok(())
        }
    }

    struct MockFileAccess {
        primary: Result<bool, FileAccessError>,
        legacy: Result<bool, FileAccessError>,
    }

    impl MockFileAccess {
        fn granted() -> Self {
            Self {
                primary: Ok(true),
                legacy: Ok(true),
            }
        }

        fn denied() -> Self {
            Self {
                primary: Ok(false),
                legacy: Ok(false),
            }
        }

        fn legacy_only(allowed: bool) -> Self {
            Self {
                primary: Err(FileAccessError::Unavailable("not in this context".into())),
                legacy: Ok(allowed),
            }
        }

        fn broken() -> Self {
            Self {
                primary: Err(FileAccessError::Unavailable("no".into())),
                legacy: Err(FileAccessError::CheckFailed("also no".into())),
            }
        }
    }

    #[async_trait]
    impl FileAccessCheck for MockFileAccess {
        async fn is_allowed(&self) -> Result<bool, FileAccessError> {
            self.primary.clone()
        }

        async fn is_allowed_legacy(&self) -> Result<bool, FileAccessError> {
            self.legacy.clone()
        }
    }

    type TestUseCase = ClipPageUseCase<
        MockExtractor,
        MockParser,
        RecordingClipboard,
        RecordingBadge,
        RecordingNotifier,
        MockFileAccess,
    >;

    fn use_case(
        extractor: MockExtractor,
        parser: MockParser,
        clipboard: RecordingClipboard,
        file_access: MockFileAccess,
    ) -> TestUseCase {
        ClipPageUseCase::new(
            extractor,
            parser,
            clipboard,
            Arc::new(RecordingBadge::default()),
            RecordingNotifier::default(),
            file_access,
        )
    }

    fn https_activation() -> Activation {
        Activation::new(TabId(1), "https://example.com/course")
    }

    #[tokio::test(start_paused = true)]
    async fn successful_clip_copies_and_badges() {
        let uc = use_case(
            MockExtractor::ok("<html><body>page</body></html>"),
            MockParser::ok("Задание 1: ...\nЗадание 2: ..."),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            uc.page_clipboard.copied_texts(),
            vec!["Задание 1: ...\nЗадание 2: ...".to_string()]
        );
        assert!(uc.notifier.notices().is_empty());

        // Badge set immediately, cleared after the fixed 3 s delay.
        assert_eq!(
            uc.badge.events(),
            vec![BadgeEvent::Set(BADGE_TEXT.into(), BADGE_COLOR.into())]
        );
        tokio::time::sleep(BADGE_CLEAR_DELAY + Duration::from_millis(100)).await;
        assert_eq!(
            uc.badge.events(),
            vec![
                BadgeEvent::Set(BADGE_TEXT.into(), BADGE_COLOR.into()),
                BadgeEvent::Clear
            ]
        );
    }

    #[tokio::test]
    async fn badge_is_not_cleared_before_the_delay() {
        tokio::time::pause();
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        uc.execute(https_activation()).await;
        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(uc.badge.events().len(), 1, "cleared too early");
    }

    #[tokio::test]
    async fn missing_tab_url_aborts() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::granted(),
        );

        let outcome = uc.execute(Activation::without_url(TabId(1))).await;
        assert_eq!(outcome, Outcome::TabUrlMissing);
        assert_eq!(uc.extractor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::TabUrlError);
    }

    #[tokio::test]
    async fn unparsable_url_aborts() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::granted(),
        );

        let outcome = uc
            .execute(Activation::new(TabId(1), "not a url at all"))
            .await;
        assert!(matches!(outcome, Outcome::InvalidUrl { .. }));
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::InvalidUrlError);
    }

    #[tokio::test]
    async fn disallowed_protocol_aborts_before_extraction() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::granted(),
        );

        let outcome = uc
            .execute(Activation::new(TabId(1), "chrome://extensions/"))
            .await;
        assert_eq!(
            outcome,
            Outcome::ProtocolNotAllowed {
                scheme: "chrome".into()
            }
        );
        assert_eq!(uc.extractor.calls.load(Ordering::SeqCst), 0);
        assert!(uc.page_clipboard.copied_texts().is_empty());
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::ProtocolError);
    }

    #[tokio::test]
    async fn file_scheme_without_grant_aborts_before_extraction() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc
            .execute(Activation::new(TabId(1), "file:///tmp/page.html"))
            .await;
        assert_eq!(outcome, Outcome::FileAccessDenied);
        assert_eq!(uc.extractor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::PermissionError);
    }

    #[tokio::test]
    async fn file_scheme_grant_via_legacy_check_succeeds() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::legacy_only(true),
        );

        let outcome = uc
            .execute(Activation::new(TabId(1), "file:///tmp/page.html"))
            .await;
        assert_eq!(outcome, Outcome::Success);
    }

    #[tokio::test]
    async fn undeterminable_file_access_aborts() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::broken(),
        );

        let outcome = uc
            .execute(Activation::new(TabId(1), "file:///tmp/page.html"))
            .await;
        assert_eq!(outcome, Outcome::FileAccessUndetermined);
        assert_eq!(uc.extractor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn http_scheme_skips_file_access_check() {
        // A broken checker must not matter for http pages.
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::broken(),
        );

        let outcome = uc
            .execute(Activation::new(TabId(1), "http://example.com/"))
            .await;
        assert_eq!(outcome, Outcome::Success);
    }

    #[tokio::test]
    async fn empty_extraction_reports_get_html_error() {
        let uc = use_case(
            MockExtractor::ok("   "),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert!(matches!(outcome, Outcome::ExtractionFailed { .. }));
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::GetHtmlError);
    }

    #[tokio::test]
    async fn missing_host_permission_is_tagged_not_sniffed() {
        let uc = use_case(
            MockExtractor::err(ExtractError::MissingHostPermission),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert_eq!(
            outcome,
            Outcome::HostFault(HostFault::MissingHostPermission)
        );
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::PermissionError);
    }

    #[tokio::test]
    async fn parser_setup_failure_reports_parse_error() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::err(ParserError::Setup("parseAll is not defined".into())),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert!(matches!(outcome, Outcome::ParserSetup { .. }));
        assert!(uc.page_clipboard.copied_texts().is_empty());
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::ParseError);
    }

    #[tokio::test]
    async fn broken_parser_channel_is_a_host_fault() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::err(ParserError::ChannelClosed("receiver gone".into())),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert_eq!(outcome, Outcome::HostFault(HostFault::ChannelBroken));
    }

    #[tokio::test]
    async fn sentinel_result_never_reaches_the_clipboard() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok(PARSE_FAILURE_SENTINEL),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert_eq!(outcome, Outcome::SentinelResult);
        assert!(uc.page_clipboard.copied_texts().is_empty());
        assert_eq!(uc.notifier.notices()[0].id, NoticeId::EmptyParseResult);
    }

    #[tokio::test]
    async fn whitespace_only_result_reports_no_data() {
        let uc = use_case(
            MockExtractor::ok("<html/>"),
            MockParser::ok("  \n "),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        let outcome = uc.execute(https_activation()).await;
        assert_eq!(outcome, Outcome::NoData);
        assert!(uc.page_clipboard.copied_texts().is_empty());
    }

    #[tokio::test]
    async fn copy_refusal_script_error_and_no_result_get_distinct_details() {
        let responses = [
            (CopyInjection::Refused, "returned an error"),
            (
                CopyInjection::Failed("DOMException".into()),
                "DOMException",
            ),
            (CopyInjection::NoResult, "no result"),
        ];

        for (response, expected_fragment) in responses {
            let uc = use_case(
                MockExtractor::ok("<html/>"),
                MockParser::ok("text"),
                RecordingClipboard::responding(response),
                MockFileAccess::denied(),
            );

            let outcome = uc.execute(https_activation()).await;
            match outcome {
                Outcome::CopyFailed { detail } => {
                    assert!(detail.contains(expected_fragment), "{detail}")
                }
                other => panic!("expected copy failure, got {other:?}"),
            }
            assert_eq!(uc.notifier.notices().len(), 1);
            assert_eq!(uc.notifier.notices()[0].id, NoticeId::CopyError);
        }
    }

    #[tokio::test]
    async fn each_failure_fires_exactly_one_notification() {
        let uc = use_case(
            MockExtractor::err(ExtractError::NoResult),
            MockParser::ok("text"),
            RecordingClipboard::responding(CopyInjection::Copied),
            MockFileAccess::denied(),
        );

        uc.execute(https_activation()).await;
        assert_eq!(uc.notifier.notices().len(), 1);
    }
}
