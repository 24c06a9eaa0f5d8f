//! Human-readable descriptions for back/forward cache not-restored reasons.
//!
//! Keys are the protocol's reason codes. Codes not listed here are shown
//! verbatim by callers.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static NOT_RESTORED_REASONS: &[(&str, &str)] = &[
    ("NotPrimaryMainFrame", "Navigation happened in a frame other than the main frame."),
    ("BackForwardCacheDisabled", "Back/forward cache is disabled by flags. Visit chrome://flags/#back-forward-cache to enable it locally on this device."),
    ("RelatedActiveContentsExist", "The page was opened using '`window.open()`' and another tab has a reference to it, or the page opened a window."),
    ("HTTPStatusNotOK", "Only pages with a status code of 2XX can be cached."),
    ("SchemeNotHTTPOrHTTPS", "Only pages whose URL scheme is HTTP / HTTPS can be cached."),
    ("Loading", "The page did not finish loading before navigating away."),
    ("WasGrantedMediaAccess", "Pages that have granted access to record video or audio are not currently eligible for back/forward cache."),
    ("HTTPMethodNotGET", "Only pages loaded via a GET request are eligible for back/forward cache."),
    ("SubframeIsNavigating", "An iframe on the page started a navigation that did not complete."),
    ("Timeout", "The page exceeded the maximum time in back/forward cache and was expired."),
    ("CacheLimit", "The page was evicted from the cache to allow another page to be cached."),
    ("JavaScriptExecution", "Chrome detected an attempt to execute JavaScript while in the cache."),
    ("RendererProcessKilled", "The renderer process for the page in back/forward cache was killed."),
    ("RendererProcessCrashed", "The renderer process for the page in back/forward cache crashed."),
    ("GrantedMediaStreamAccess", "Pages that have granted media stream access are not currently eligible for back/forward cache."),
    ("CacheFlushed", "The cache was intentionally cleared."),
    ("ServiceWorkerVersionActivation", "The page was evicted from back/forward cache due to a service worker activation."),
    ("SessionRestored", "Chrome restarted and cleared the back/forward cache entries."),
    ("ServiceWorkerPostMessage", "A service worker attempted to send the page in back/forward cache a `MessageEvent`."),
    ("EnteredBackForwardCacheBeforeServiceWorkerHostAdded", "A service worker was activated while the page was in back/forward cache."),
    ("ServiceWorkerClaim", "The page was claimed by a service worker while it is in back/forward cache."),
    ("ServiceWorkerUnregistration", "ServiceWorker was unregistered while a page was in back/forward cache."),
    ("HaveInnerContents", "Pages that have inner contents are not currently eligible for back/forward cache."),
    ("TimeoutPuttingInCache", "The page timed out entering back/forward cache (likely due to long-running pagehide handlers)."),
    ("BackForwardCacheDisabledByLowMemory", "Back/forward cache is disabled due to insufficient memory."),
    ("BackForwardCacheDisabledByCommandLine", "Back/forward cache is disabled by the command line."),
    ("NetworkRequestDatapipeDrainedAsBytesConsumer", "Pages that have inflight fetch() or XHR are not currently eligible for back/forward cache."),
    ("NetworkRequestRedirected", "The page was evicted from back/forward cache because an active network request involved a redirect."),
    ("NetworkRequestTimeout", "The page was evicted from the cache because a network connection was open too long. Chrome limits the amount of time that a page may receive data while cached."),
    ("NetworkExceedsBufferLimit", "The page was evicted from the cache because an active network connection received too much data. Chrome limits the amount of data that a page may receive while cached."),
    ("NavigationCancelledWhileRestoring", "Navigation was cancelled before the page could be restored from back/forward cache."),
    ("UserAgentOverrideDiffers", "Browser has changed the user agent override header."),
    ("ForegroundCacheLimit", "The page was evicted from the cache to allow another page to be cached."),
    ("BrowsingInstanceNotSwapped", "The BrowsingInstance for the page was not swapped, so it could not be cached."),
    ("BackForwardCacheDisabledForDelegate", "Back/forward cache is not supported by delegate."),
    ("UnloadHandlerExistsInMainFrame", "The page has an unload handler in the main frame."),
    ("UnloadHandlerExistsInSubFrame", "The page has an unload handler in a sub frame."),
    ("CacheControlNoStore", "Pages with cache-control:no-store header cannot enter back/forward cache."),
    ("CacheControlNoStoreCookieModified", "The page was evicted from the cache because a cookie was modified while it used cache-control:no-store."),
    ("CacheControlNoStoreHTTPOnlyCookieModified", "The page was evicted from the cache because an HTTPOnly cookie was modified while it used cache-control:no-store."),
    ("NoResponseHead", "Pages that do not have a valid response head cannot enter back/forward cache."),
    ("ErrorDocument", "Back/forward cache is disabled due to a document error."),
    ("FencedFramesEmbedder", "Pages using FencedFrames cannot be stored in bfcache."),
    ("WebSocket", "Pages with WebSocket cannot enter back/forward cache."),
    ("WebTransport", "Pages with WebTransport cannot enter back/forward cache."),
    ("WebRTC", "Pages with WebRTC cannot enter back/forward cache."),
    ("MainResourceHasCacheControlNoStore", "Pages whose main resource has cache-control:no-store cannot enter back/forward cache."),
    ("MainResourceHasCacheControlNoCache", "Pages whose main resource has cache-control:no-cache cannot enter back/forward cache."),
    ("SubresourceHasCacheControlNoStore", "Pages whose subresource has cache-control:no-store cannot enter back/forward cache."),
    ("SubresourceHasCacheControlNoCache", "Pages whose subresource has cache-control:no-cache cannot enter back/forward cache."),
    ("ContainsPlugins", "Pages containing plugins are not currently eligible for back/forward cache."),
    ("DocumentLoaded", "The document did not finish loading before navigating away."),
    ("DedicatedWorkerOrWorklet", "Pages that use a dedicated worker or worklet are not currently eligible for back/forward cache."),
    ("OutstandingNetworkRequestOthers", "Pages with an in-flight network request are not currently eligible for back/forward cache."),
    ("OutstandingNetworkRequestFetch", "Pages with an in-flight fetch network request are not currently eligible for back/forward cache."),
    ("OutstandingNetworkRequestXHR", "Pages with an in-flight XHR network request are not currently eligible for back/forward cache."),
    ("OutstandingNetworkRequestDirectSocket", "Pages with an in-flight direct socket request are not currently eligible for back/forward cache."),
    ("RequestedMIDIPermission", "Pages that have requested MIDI permissions are not currently eligible for back/forward cache."),
    ("RequestedAudioCapturePermission", "Pages that have requested audio capture permissions are not currently eligible for back/forward cache."),
    ("RequestedVideoCapturePermission", "Pages that have requested video capture permissions are not currently eligible for back/forward cache."),
    ("RequestedBackForwardCacheBlockedSensors", "Pages that have requested sensor permissions are not currently eligible for back/forward cache."),
    ("RequestedBackgroundWorkPermission", "Pages that have requested background sync or fetch permissions are not currently eligible for back/forward cache."),
    ("BroadcastChannel", "The page cannot be cached because it has a BroadcastChannel instance with registered listeners."),
    ("IndexedDBConnection", "Pages that have an open IndexedDB connection are not currently eligible for back/forward cache."),
    ("IndexedDBEvent", "Back/forward cache is disabled due to an IndexedDB event."),
    ("WebXR", "Pages that use WebXR are not currently eligible for back/forward cache."),
    ("SharedWorker", "Pages that use SharedWorker are not currently eligible for back/forward cache."),
    ("WebLocks", "Pages that use WebLocks are not currently eligible for back/forward cache."),
    ("WebHID", "Pages that use WebHID are not currently eligible for back/forward cache."),
    ("WebShare", "Pages that use WebShare are not currently eligible for back/forward cache."),
    ("WebOTPService", "Pages that use WebOTPService are not currently eligible for back/forward cache."),
    ("WebNfc", "Pages that use WebNfc are not currently eligible for back/forward cache."),
    ("WebFileSystem", "Pages that use WebFileSystem are not currently eligible for back/forward cache."),
    ("WebDatabase", "Pages that use WebDatabase are not currently eligible for back/forward cache."),
    ("SpeechRecognizer", "Pages that use SpeechRecognizer are not currently eligible for back/forward cache."),
    ("SpeechSynthesis", "Pages that use SpeechSynthesis are not currently eligible for back/forward cache."),
    ("PaymentManager", "Pages that use Payment Manager are not currently eligible for back/forward cache."),
    ("KeyboardLock", "Pages that use Keyboard lock are not currently eligible for back/forward cache."),
    ("Printing", "Pages that show Printing UI are not currently eligible for back/forward cache."),
    ("PictureInPicture", "Pages that use Picture-in-Picture are not currently eligible for back/forward cache."),
    ("IdleManager", "Pages that use IdleManager are not currently eligible for back/forward cache."),
    ("AppBanner", "Pages that requested an AppBanner are not currently eligible for back/forward cache."),
    ("ContentMediaDevicesDispatcherHost", "Pages that request media devices are not currently eligible for back/forward cache."),
    ("ContentSecurityHandler", "Back/forward cache is disabled by the security handler."),
    ("ContentWebAuthenticationAPI", "Pages that use WebAuthentication API are not currently eligible for back/forward cache."),
    ("ContentFileChooser", "Pages that use FileChooser API are not currently eligible for back/forward cache."),
    ("ContentSerial", "Pages that use Serial API are not currently eligible for back/forward cache."),
    ("ContentFileSystemAccess", "Pages that use File System Access API are not currently eligible for back/forward cache."),
    ("ContentWebBluetooth", "Pages that use WebBluetooth API are not currently eligible for back/forward cache."),
    ("ContentWebUSB", "Pages that use WebUSB API are not currently eligible for back/forward cache."),
    ("ContentMediaSessionService", "Pages that use MediaSession API and set a playback state are not currently eligible for back/forward cache."),
    ("ContentScreenReader", "Back/forward cache is disabled because a screen reader is active."),
    ("EmbedderPopupBlockerTabHelper", "Popup blocker was present upon navigation."),
    ("EmbedderSafeBrowsingTriggeredPopupBlocker", "Safe Browsing considered this page to be abusive and blocked popup."),
    ("EmbedderSafeBrowsingThreatDetails", "Safe Browsing details were shown upon navigation."),
    ("EmbedderAppBannerManager", "App Banner was present upon navigation."),
    ("EmbedderDomDistillerViewerSource", "DOM Distiller Viewer was present upon navigation."),
    ("EmbedderDomDistillerSelfDeletingRequestDelegate", "DOM distillation was in progress upon navigation."),
    ("EmbedderOomInterventionTabHelper", "Out-Of-Memory Intervention bar was present upon navigation."),
    ("EmbedderOfflinePage", "The offline page was shown upon navigation."),
    ("EmbedderChromePasswordManagerClientBindCredentialManager", "Chrome Password Manager was present upon navigation."),
    ("EmbedderPermissionRequestManager", "There were permission requests upon navigation."),
    ("EmbedderModalDialog", "Modal dialog such as form resubmission or http password dialog was shown for the page upon navigation."),
    ("EmbedderExtensions", "Back/forward cache is disabled due to extensions."),
    ("EmbedderExtensionMessaging", "Extensions with long-lived connection should close the connection before entering back/forward cache."),
    ("EmbedderExtensionMessagingForOpenPort", "Extensions with long-lived connection attempted to send messages to frames in back/forward cache."),
    ("EmbedderExtensionSentMessageToCachedFrame", "Back/forward cache is disabled due to extensions."),
    ("InjectedJavascript", "Pages that JavaScript is injected into by extensions are not currently eligible for back/forward cache."),
    ("InjectedStyleSheet", "Pages that a StyleSheet is injected into by extensions are not currently eligible for back/forward cache."),
    ("Dummy", "Internal error."),
    ("JsNetworkRequestReceivedCacheControlNoStoreResource", "Back/forward cache is disabled because some JavaScript network request received resource with `Cache-Control: no-store` header."),
    ("WebRTCSticky", "Pages that have used WebRTC cannot enter back/forward cache."),
    ("WebTransportSticky", "Pages that have used WebTransport cannot enter back/forward cache."),
    ("WebSocketSticky", "Pages that have used WebSocket cannot enter back/forward cache."),
    ("KeepaliveRequest", "Back/forward cache is disabled due to a keepalive request."),
    ("SmartCard", "Pages that use SmartCard API are not currently eligible for back/forward cache."),
    ("LiveMediaStreamTrack", "Pages that have a live media stream track are not currently eligible for back/forward cache."),
    ("UnloadHandler", "The page has an unload handler."),
    ("ParserAborted", "The page's HTML parser was aborted before navigating away."),
    ("ActivationNavigationsDisallowedForBug1234857", "Back/forward cache is disabled for activation navigations."),
    ("CookieDisabled", "Back/forward cache is disabled because cookies are disabled on a page that uses `Cache-Control: no-store`."),
    ("HTTPAuthRequired", "Back/forward cache is disabled because HTTP authentication was required."),
    ("CookieFlushed", "Back/forward cache is disabled because cookies were flushed."),
    ("BroadcastChannelOnMessage", "The page was evicted because a BroadcastChannel received a message while cached."),
    ("WebViewSettingsChanged", "Back/forward cache is disabled because WebView settings changed."),
    ("WebViewJavaScriptObjectChanged", "Back/forward cache is disabled because the WebView JavaScript object changed."),
    ("WebViewMessageListenerInjected", "Back/forward cache is disabled because a WebView message listener was injected."),
    ("WebViewSafeBrowsingAllowlistChanged", "Back/forward cache is disabled because the WebView safe browsing allowlist changed."),
    ("WebViewDocumentStartJavascriptChanged", "Back/forward cache is disabled because WebView document start JavaScript changed."),
];

static DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    NOT_RESTORED_REASONS
        .iter()
        .map(|(code, description)| (*code, *description))
        .collect()
});

/// Look up the description for a reason code.
pub fn describe(code: &str) -> Option<&'static str> {
    DESCRIPTIONS.get(code).copied()
}

/// Description for a reason code, or the code itself when unknown.
pub fn describe_or_code(code: &str) -> &str {
    describe(code).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_reason() {
        assert_eq!(
            describe("WebSocket"),
            Some("Pages with WebSocket cannot enter back/forward cache.")
        );
    }

    #[test]
    fn test_unknown_reason_falls_back_to_code() {
        assert_eq!(describe("SomeFutureReason"), None);
        assert_eq!(describe_or_code("SomeFutureReason"), "SomeFutureReason");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(describe("websocket").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        assert_eq!(DESCRIPTIONS.len(), NOT_RESTORED_REASONS.len());
    }
}
