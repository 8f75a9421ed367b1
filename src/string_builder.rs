//! 字符串拼接工具：各子句自带前导空格，这里只负责顺序追加。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// 以 `sep` 连接 `items`，跳过空串。
    pub(crate) fn write_strings(&mut self, items: &[String], sep: &str) {
        let mut first_added = false;
        for s in items {
            if s.is_empty() {
                continue;
            }
            if first_added {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s);
            first_added = true;
        }
    }

    pub(crate) fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
