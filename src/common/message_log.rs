/// 页面上的消息日志，只追加，不会清除
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    lines: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 返回 `since` 之后新增的行，渲染端用它做增量输出
    pub fn since(&self, since: usize) -> &[String] {
        &self.lines[since.min(self.lines.len())..]
    }
}
