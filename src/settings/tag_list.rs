use uuid::Uuid;

/// 渲染时附在每个标签末尾的删除标记
pub const REMOVAL_MARKER: char = '×';

/// 标签输入框上的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    id: Uuid,
    text: String,
}

impl TagEntry {
    fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 显示文本，例如 `Linux×`
    pub fn label(&self) -> String {
        format!("{}{}", self.text, REMOVAL_MARKER)
    }
}

/// 去掉末尾的一个删除标记
pub fn strip_removal_marker(label: &str) -> &str {
    label.strip_suffix(REMOVAL_MARKER).unwrap_or(label)
}

/// 可编辑的标签列表：只追加，顺序即显示顺序，允许重复
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    input: String,
    entries: Vec<TagEntry>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// "添加" 按钮：把输入框内容追加为新条目并清空输入框。空白输入被忽略。
    pub fn commit(&mut self) -> Option<Uuid> {
        let value = std::mem::take(&mut self.input);
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let entry = TagEntry::new(value.to_string());
        let id = entry.id;
        self.entries.push(entry);
        Some(id)
    }

    /// 在输入框里按回车等同于点击添加
    pub fn handle_key(&mut self, key: InputKey) -> Option<Uuid> {
        match key {
            InputKey::Enter => self.commit(),
            InputKey::Other => None,
        }
    }

    /// 只删除被点击的那一项
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(TagEntry::label).collect()
    }

    /// 从显示文本中读回标签值
    pub fn values(&self) -> Vec<String> {
        self.labels()
            .iter()
            .map(|label| strip_removal_marker(label).to_string())
            .collect()
    }

    /// 用给定的值整体替换列表（加载设置时使用）
    pub fn replace_all<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries = values
            .into_iter()
            .map(|value| TagEntry::new(value.into()))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
