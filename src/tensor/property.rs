/*
 * @Author       : 老董
 * @Date         : 2026-06-14
 * @Description  : 本文件仅包含张量的属性方法，不包含任何运算方法
 */

use super::Tensor;

impl Tensor {
    /// 返回张量的形状。
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]。
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 张量的维（dim）数、阶（rank）数，即`shape()`的元素个数。
    /// 如：形状为`[]`的标量阶数为0，向量阶数为1，矩阵阶数为2，以此类推。
    /// NOTE: 这里用`dimension`是参照了大多数库的命名规范，如PyTorch、NumPy等；
    /// 张量中所有元素的数量请使用`size()`方法获取。
    pub fn dimension(&self) -> usize {
        self.data.ndim()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断两个张量的形状是否严格一致。如：形状为[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 判断张量是否为标量
    pub fn is_scalar(&self) -> bool {
        self.shape().is_empty() || self.shape().iter().all(|x| *x == 1)
    }

    /// 转化为纯数（number）。若为标量，则返回Some(number)，否则返回None
    pub fn to_number(&self) -> Option<f32> {
        if self.is_scalar() {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// 判断本张量能否与另一个张量按NumPy广播规则做二元运算：
    /// 从右向左对齐维度，每个维度须相等或其中一个为1
    pub fn can_broadcast_with(&self, other: &Self) -> bool {
        self.broadcast_shape_with(other).is_some()
    }

    /// 计算与另一个张量广播后的公共形状；形状不兼容时返回None
    pub(in crate::tensor) fn broadcast_shape_with(&self, other: &Self) -> Option<Vec<usize>> {
        let (s1, s2) = (self.shape(), other.shape());
        let ndim = s1.len().max(s2.len());
        let mut shape = vec![0; ndim];
        for i in 0..ndim {
            // 从右向左对齐，缺失的维度按1处理
            let d1 = if i < s1.len() { s1[s1.len() - 1 - i] } else { 1 };
            let d2 = if i < s2.len() { s2[s2.len() - 1 - i] } else { 1 };
            if d1 != d2 && d1 != 1 && d2 != 1 {
                return None;
            }
            shape[ndim - 1 - i] = d1.max(d2);
        }
        Some(shape)
    }
}
