use log::error;

use super::App;

impl App {
    /// 切换设置菜单中的选项值并保存
    ///
    /// 0 = 界面配色，1 = 新漫画的默认阅读模式
    pub fn cycle_setting(&mut self, index: usize) {
        match index {
            0 => self.settings.theme = self.settings.theme.next(),
            1 => self.settings.default_mode = self.settings.default_mode.next(),
            _ => return,
        }

        if let Err(e) = self.settings.save(&self.settings_path) {
            error!("Failed to save settings: {}", e);
            self.set_error(format!("保存设置失败: {}", e));
        }
    }
}
