use alloc::boxed::Box;
use alloc::string::String;

use crate::*;

/// Query parameter carrying a shared label list.
pub const SHARE_PARAM: &str = "list";

/// File name offered when exporting the label list.
pub const EXPORT_FILE_NAME: &str = "bingo-labels.json";

/// Completion callback for asynchronous host operations.
pub type Continuation<T> = Box<dyn FnOnce(Result<T>)>;

/// Environment side effects the sharing flow needs: reading the page URL and writing the
/// clipboard. Browser builds implement this over `web_sys`, tests with plain structs.
pub trait ShareHost {
    /// Decoded value of the share parameter on the current page, if any.
    fn read_share_param(&self) -> Option<String>;

    /// Absolute URL of the current page with the query replaced by `param=value`.
    fn share_url(&self, param: &str, value: &str) -> Option<String>;

    fn write_clipboard(&self, text: String, done: Continuation<()>);
}

/// Decodes the shared label list from the page, `Ok(None)` when the page carries none.
pub fn decode_shared_pool(host: &impl ShareHost) -> Result<Option<LabelPool>> {
    host.read_share_param()
        .map(|text| LabelPool::deserialize(&text))
        .transpose()
}

/// Pool to start the session with: the shared one when the page carries a valid list,
/// otherwise the built-in defaults.
pub fn startup_pool(host: &impl ShareHost) -> LabelPool {
    match decode_shared_pool(host) {
        Ok(Some(pool)) => {
            log::debug!("loaded {} labels from share link", pool.len());
            pool
        }
        Ok(None) => LabelPool::with_defaults(),
        Err(err) => {
            log::error!("ignoring share link: {}", err);
            LabelPool::with_defaults()
        }
    }
}

/// Copies a link carrying `pool` to the clipboard; `done` receives the link on success.
pub fn share(pool: &LabelPool, host: &impl ShareHost, done: Continuation<String>) {
    let Some(url) = host.share_url(SHARE_PARAM, &pool.serialize()) else {
        done(Err(BingoError::Clipboard(String::from(
            "could not determine page url",
        ))));
        return;
    };
    let link = url.clone();
    host.write_clipboard(
        url,
        Box::new(move |result| {
            if let Err(err) = &result {
                log::error!("share failed: {}", err);
            }
            done(result.map(|()| link));
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        param: Option<String>,
        clipboard_fails: bool,
        clipboard: RefCell<Vec<String>>,
    }

    impl ShareHost for FakeHost {
        fn read_share_param(&self) -> Option<String> {
            self.param.clone()
        }

        fn share_url(&self, param: &str, value: &str) -> Option<String> {
            Some(format!("https://bingo.test/?{param}={value}"))
        }

        fn write_clipboard(&self, text: String, done: Continuation<()>) {
            if self.clipboard_fails {
                done(Err(BingoError::Clipboard("denied".to_string())));
            } else {
                self.clipboard.borrow_mut().push(text);
                done(Ok(()));
            }
        }
    }

    fn capture() -> (Rc<RefCell<Option<Result<String>>>>, Continuation<String>) {
        let slot = Rc::new(RefCell::new(None));
        let sink = slot.clone();
        (slot, Box::new(move |result| *sink.borrow_mut() = Some(result)))
    }

    #[test]
    fn shared_list_replaces_defaults() {
        let host = FakeHost {
            param: Some(r#"["X","Y"]"#.to_string()),
            ..Default::default()
        };

        assert_eq!(startup_pool(&host).labels(), ["X", "Y"]);
    }

    #[test]
    fn missing_param_keeps_defaults() {
        let host = FakeHost::default();

        assert_eq!(decode_shared_pool(&host), Ok(None));
        assert_eq!(startup_pool(&host), LabelPool::with_defaults());
    }

    #[test]
    fn broken_param_falls_back_to_defaults() {
        let host = FakeHost {
            param: Some("[\"X\",".to_string()),
            ..Default::default()
        };

        assert!(matches!(decode_shared_pool(&host), Err(BingoError::Parse(_))));
        assert_eq!(startup_pool(&host), LabelPool::with_defaults());
    }

    #[test]
    fn share_copies_link_with_serialized_pool() {
        let host = FakeHost::default();
        let pool: LabelPool = ["A", "B"].into_iter().collect();
        let (slot, done) = capture();

        share(&pool, &host, done);

        let link = r#"https://bingo.test/?list=["A","B"]"#.to_string();
        assert_eq!(slot.borrow().clone(), Some(Ok(link.clone())));
        assert_eq!(host.clipboard.borrow().as_slice(), [link]);
    }

    #[test]
    fn share_reports_clipboard_failure() {
        let host = FakeHost {
            clipboard_fails: true,
            ..Default::default()
        };
        let (slot, done) = capture();

        share(&LabelPool::with_defaults(), &host, done);

        assert!(matches!(
            slot.borrow().clone(),
            Some(Err(BingoError::Clipboard(_)))
        ));
    }
}
